//! Geofence test: which stations is the device close enough to check in at.

use crate::models::station::{Position, Station};

/// Mean Earth radius in meters (haversine).
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A station whose geofence contains the device position.
#[derive(Debug, Clone)]
pub struct NearbyStation {
    pub station: Station,
    pub distance_m: f64,
}

/// Great-circle distance between two coordinates in meters.
pub fn distance_meters(a: Position, b: Position) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Stations within their own check-in radius of `position`, nearest first.
///
/// Stations without parseable coordinates are skipped. An empty result is
/// a normal outcome, not an error: the form disables submission and asks
/// the user to move closer.
pub fn find_nearby(position: Position, stations: &[Station]) -> Vec<NearbyStation> {
    let mut hits: Vec<NearbyStation> = stations
        .iter()
        .filter_map(|st| {
            let station_pos = st.position()?;
            let distance_m = distance_meters(position, station_pos);
            (distance_m <= st.radius_meters()).then(|| NearbyStation {
                station: st.clone(),
                distance_m,
            })
        })
        .collect();

    // sort_by is stable, so equal distances keep roster order
    hits.sort_by(|a, b| a.distance_m.total_cmp(&b.distance_m));
    hits
}
