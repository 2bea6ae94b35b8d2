//! Time utilities: parsing request dates and instants.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};

/// Parse a YYYY-MM-DD calendar date as sent by the date filter inputs.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse an RFC 3339 instant (the `at` test-clock parameter).
pub fn parse_instant(s: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| AppError::InvalidTime(s.to_string()))
}
