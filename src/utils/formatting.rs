//! Formatting helpers for user-facing strings.

/// Distance text shown next to an in-range station: meters under a
/// kilometer, kilometers with two decimals above.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as i64)
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}
