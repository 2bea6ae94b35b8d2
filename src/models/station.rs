use serde::{Deserialize, Serialize};

/// Geofence radius in meters applied when the configured value is
/// missing, zero, or not parseable as a positive number.
pub const DEFAULT_RADIUS_M: f64 = 50.0;

/// Which status policy a station falls under. A small fixed set of
/// stations only operates a weekday day shift; everything else runs
/// around the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StationKind {
    Standard,
    DayShift,
}

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub lat: f64,
    pub lon: f64,
}

/// A station record as kept in the roster sheet.
///
/// Coordinates and radius stay raw text on purpose: the sheet is
/// hand-edited, and a row with a blank or non-numeric coordinate must be
/// skipped by the geofence, not rejected as an error. Wire field names
/// match the sheet columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename = "SID")]
    pub sid: String,
    #[serde(rename = "SName")]
    pub name: String,
    #[serde(rename = "Lat", default)]
    pub lat: String,
    #[serde(rename = "Lon", default)]
    pub lon: String,
    #[serde(rename = "Radius_m", default)]
    pub radius_m: String,
    #[serde(rename = "Unit", default)]
    pub unit: String,
}

impl Station {
    /// Parsed coordinates, or None when either field is not a finite number.
    pub fn position(&self) -> Option<Position> {
        let lat = self.lat.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        let lon = self.lon.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(Position { lat, lon })
    }

    /// Configured geofence radius with the 50 m fallback.
    pub fn radius_meters(&self) -> f64 {
        match self.radius_m.trim().parse::<f64>() {
            Ok(r) if r > 0.0 && r.is_finite() => r,
            _ => DEFAULT_RADIUS_M,
        }
    }
}
