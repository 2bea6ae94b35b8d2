//! Station status engine.
//!
//! One consolidated implementation of the red/yellow/green/gray status
//! logic that each legacy page carried its own near-copy of. The
//! historical divergences past the 8 hour mark are expressed as named,
//! selectable policy variants instead of copy-pasted branches; the test
//! suite pins the default.

use crate::core::jobs::{self, JobCategory};
use crate::models::checkin::CheckinEvent;
use crate::models::station::{Station, StationKind};
use crate::models::status::{StatusBucket, StatusRecord};
use chrono::{DateTime, Datelike, Duration, FixedOffset, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Supplemental message for a standard station past its shift length.
pub const LABEL_AWAITING_SHIFT_CHANGE: &str = "(awaiting shift change)";
/// Supplemental message for a day-shift station outside its duty window.
pub const LABEL_OFF_DUTY: &str = "off duty";

/// How a standard station's elapsed-time buckets are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusPolicy {
    /// Ok up to 8 hours, Late up to 16, Offline beyond.
    #[default]
    Tiered8h16h,
    /// Ok up to 8 hours, Late after that for as long as the event exists.
    Strict8hCutoff,
    /// Any shift entry inside the current duty window counts as Ok.
    /// Before 08:00 the previous day's entry still covers the overnight
    /// shift; from 08:00 only a same-day entry does.
    AnyRecentEvent,
}

/// Reference instant for the computation.
///
/// A manual override (the dashboard's test-mode clock) additionally drops
/// events stamped after the reference, which a live clock never observes.
#[derive(Debug, Clone, Copy)]
pub enum ReferenceTime {
    Now(DateTime<Utc>),
    Override(DateTime<Utc>),
}

impl ReferenceTime {
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            Self::Now(t) | Self::Override(t) => *t,
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, Self::Override(_))
    }
}

/// Roster-level settings: which station ids are tracked and in what order,
/// which of them are the day-shift variants, and which single entry stands
/// for two physical posts.
#[derive(Debug, Clone)]
pub struct Roster {
    pub sids: Vec<String>,
    pub day_shift_sids: Vec<String>,
    pub dual_post_sid: Option<String>,
}

impl Roster {
    pub fn kind_of(&self, sid: &str) -> StationKind {
        if self.day_shift_sids.iter().any(|s| s == sid) {
            StationKind::DayShift
        } else {
            StationKind::Standard
        }
    }
}

/// Compute one status record per roster entry, in roster order.
///
/// Stations are independent of each other; events are grouped by station
/// once so the pass is O(events + stations).
pub fn compute_status(
    reference: ReferenceTime,
    roster: &Roster,
    stations: &[Station],
    events: &[CheckinEvent],
    policy: StatusPolicy,
    tz: FixedOffset,
) -> Vec<StatusRecord> {
    let now = reference.instant();
    let local = now.with_timezone(&tz);
    // HHMM clock encoding, same comparison scheme the duty window is written in
    let clock = local.hour() * 100 + local.minute();
    let today = local.date_naive();
    let is_weekend = matches!(local.weekday(), Weekday::Sat | Weekday::Sun);

    let mut by_sid: HashMap<&str, Vec<&CheckinEvent>> = HashMap::new();
    for ev in events {
        by_sid.entry(ev.sid.as_str()).or_default().push(ev);
    }

    let mut records = Vec::with_capacity(roster.sids.len());
    let mut counter: u32 = 1;

    for sid in &roster.sids {
        let day_shift = roster.kind_of(sid) == StationKind::DayShift;

        let badge = if day_shift {
            "Day Time".to_string()
        } else if roster.dual_post_sid.as_deref() == Some(sid.as_str()) {
            // two physical posts behind one roster entry; numbering resumes after both
            counter = 9;
            "7-8".to_string()
        } else {
            let b = counter.to_string();
            counter += 1;
            b
        };

        let last_in = by_sid.get(sid.as_str()).and_then(|evs| {
            evs.iter()
                .filter(|ev| {
                    let category = jobs::classify(&ev.job);
                    let on_shift = category == JobCategory::ShiftEntry
                        || (day_shift && category == JobCategory::DayTime);
                    if !on_shift {
                        return false;
                    }
                    if reference.is_override() && ev.time > now {
                        return false;
                    }
                    let ev_day = ev.time.with_timezone(&tz).date_naive();
                    if day_shift {
                        return ev_day == today;
                    }
                    if policy == StatusPolicy::AnyRecentEvent && clock >= 800 {
                        return ev_day == today;
                    }
                    true
                })
                .max_by_key(|ev| ev.time)
                .copied()
        });

        if !stations.iter().any(|st| st.sid == *sid) {
            records.push(StatusRecord {
                sid: sid.clone(),
                bucket: StatusBucket::NoData,
                last_event: last_in.cloned(),
                label: None,
                badge,
            });
            continue;
        }

        let (bucket, label) = if day_shift {
            match last_in {
                None => (StatusBucket::Offline, None),
                Some(_) if is_weekend || clock >= 1600 || clock < 800 => {
                    (StatusBucket::Offline, Some(LABEL_OFF_DUTY.to_string()))
                }
                Some(ev) => {
                    if now - ev.time <= Duration::hours(16) {
                        (StatusBucket::Ok, None)
                    } else {
                        (StatusBucket::Offline, None)
                    }
                }
            }
        } else {
            match last_in {
                None => (StatusBucket::Offline, None),
                Some(_) if policy == StatusPolicy::AnyRecentEvent => (StatusBucket::Ok, None),
                Some(ev) => {
                    let elapsed = now - ev.time;
                    if elapsed <= Duration::hours(8) {
                        (StatusBucket::Ok, None)
                    } else if policy == StatusPolicy::Strict8hCutoff
                        || elapsed <= Duration::hours(16)
                    {
                        (
                            StatusBucket::Late,
                            Some(LABEL_AWAITING_SHIFT_CHANGE.to_string()),
                        )
                    } else {
                        (StatusBucket::Offline, None)
                    }
                }
            }
        };

        records.push(StatusRecord {
            sid: sid.clone(),
            bucket,
            last_event: last_in.cloned(),
            label,
            badge,
        });
    }

    records
}
