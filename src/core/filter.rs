//! Report filters: text search, date range, and station, combined with
//! logical AND. Date bounds compare the event's local calendar date, not
//! the raw instant.

use crate::models::checkin::CheckinEvent;
use chrono::{FixedOffset, NaiveDate};

/// Rows kept by the default dashboard view when no filter is active.
/// A documented truncation policy of the view, not a storage limit.
pub const DEFAULT_ROW_CAP: usize = 50;

#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    /// Case-insensitive match against the user name or the station name.
    /// Callers map a blank search box to None.
    pub text: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sid: Option<String>,
}

impl ReportFilter {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.date_from.is_none() && self.date_to.is_none() && self.sid.is_none()
    }

    pub fn matches(&self, ev: &CheckinEvent, tz: FixedOffset) -> bool {
        if let Some(text) = &self.text {
            let needle = text.to_lowercase();
            let hit = ev.user_name.to_lowercase().contains(&needle)
                || ev.station_name.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }
        if let Some(sid) = &self.sid
            && ev.sid != *sid
        {
            return false;
        }
        if self.date_from.is_some() || self.date_to.is_some() {
            let local_date = ev.time.with_timezone(&tz).date_naive();
            if let Some(from) = self.date_from
                && local_date < from
            {
                return false;
            }
            if let Some(to) = self.date_to
                && local_date > to
            {
                return false;
            }
        }
        true
    }
}

/// Apply `filter` to `events`, preserving insertion order.
///
/// With no filter at all the result is capped to the 50 most recent rows;
/// any supplied filter removes the cap.
pub fn apply(events: &[CheckinEvent], filter: &ReportFilter, tz: FixedOffset) -> Vec<CheckinEvent> {
    if filter.is_empty() {
        let skip = events.len().saturating_sub(DEFAULT_ROW_CAP);
        return events[skip..].to_vec();
    }
    events
        .iter()
        .filter(|ev| filter.matches(ev, tz))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn tz() -> FixedOffset {
        FixedOffset::east_opt(7 * 3600).unwrap()
    }

    fn event(user: &str, station: &str, time: &str) -> CheckinEvent {
        CheckinEvent {
            id: String::new(),
            time: time.parse().unwrap(),
            user_id: "U1".into(),
            user_name: user.into(),
            tel: None,
            sid: "NTB".into(),
            station_name: station.into(),
            job: "เข้าปฏิบัติงานกะ".into(),
            note: None,
            weather: None,
            unit: None,
            lat: None,
            lon: None,
        }
    }

    #[test]
    fn text_matches_user_or_station_case_insensitively() {
        let ev = event("Somchai", "Nonthaburi", "2024-01-01T08:00:00Z");
        let f = ReportFilter { text: Some("somCHAI".into()), ..Default::default() };
        assert!(f.matches(&ev, tz()));
        let f = ReportFilter { text: Some("NONTHA".into()), ..Default::default() };
        assert!(f.matches(&ev, tz()));
        let f = ReportFilter { text: Some("bangkok".into()), ..Default::default() };
        assert!(!f.matches(&ev, tz()));
    }

    #[test]
    fn date_bounds_use_local_calendar_date() {
        // 18:00 UTC is already the next day at UTC+7
        let ev = event("A", "B", "2024-01-01T18:00:00Z");
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let f = ReportFilter {
            date_from: Some(day),
            date_to: Some(day),
            ..Default::default()
        };
        assert!(f.matches(&ev, tz()));
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let ev = event("A", "B", "2024-01-05T03:00:00Z");
        let day = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let from_only = ReportFilter { date_from: Some(day), ..Default::default() };
        let to_only = ReportFilter { date_to: Some(day), ..Default::default() };
        assert!(from_only.matches(&ev, tz()));
        assert!(to_only.matches(&ev, tz()));
    }

    #[test]
    fn no_filters_caps_to_most_recent_50() {
        let events: Vec<CheckinEvent> = (0..60)
            .map(|i| {
                let mut ev = event("A", "B", "2024-01-01T00:00:00Z");
                ev.time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::minutes(i);
                ev.id = format!("CK{i}");
                ev
            })
            .collect();
        let out = apply(&events, &ReportFilter::default(), tz());
        assert_eq!(out.len(), DEFAULT_ROW_CAP);
        // the 50 most recent, still in insertion order
        assert_eq!(out.first().unwrap().id, "CK10");
        assert_eq!(out.last().unwrap().id, "CK59");
    }

    #[test]
    fn any_filter_removes_the_cap() {
        let events: Vec<CheckinEvent> =
            (0..60).map(|_| event("A", "B", "2024-01-01T08:00:00Z")).collect();
        let f = ReportFilter { text: Some("a".into()), ..Default::default() };
        assert_eq!(apply(&events, &f, tz()).len(), 60);
    }
}
