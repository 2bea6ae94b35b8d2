use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single check-in row. Events are appended once and never edited or
/// deleted; wire field names match what the dashboard and map pages read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinEvent {
    pub id: String,
    pub time: DateTime<Utc>,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    pub sid: String,
    #[serde(rename = "stationName", default)]
    pub station_name: String,
    pub job: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

/// Fields supplied by the check-in form. The store assigns the id and the
/// server-observed timestamp on append.
#[derive(Debug, Clone, Default)]
pub struct NewCheckin {
    pub user_id: String,
    pub user_name: String,
    pub tel: Option<String>,
    pub sid: String,
    pub station_name: String,
    pub job: String,
    pub note: Option<String>,
    pub weather: Option<String>,
    pub unit: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}
