use super::checkin::CheckinEvent;
use serde::Serialize;

/// Coarse display state driving the card and map label colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusBucket {
    Ok,
    Late,
    Offline,
    NoData,
}

/// Derived per-station status. Recomputed on every request, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct StatusRecord {
    pub sid: String,
    pub bucket: StatusBucket,
    /// Most recent on-shift check-in considered for the bucket.
    #[serde(rename = "lastEvent", skip_serializing_if = "Option::is_none")]
    pub last_event: Option<CheckinEvent>,
    /// Supplemental message, e.g. "(awaiting shift change)".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Roster display label: sequential number, "Day Time", or "7-8".
    pub badge: String,
}
