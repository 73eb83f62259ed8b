//! Timestamp parsing for tracker-provided publish dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("Unrecognized date format: '{0}'")]
pub struct DateParseError(pub String);

/// Formats tried for values without an explicit offset, all read as UTC.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    // Invariant-culture general form
    "%m/%d/%Y %H:%M:%S",
];

/// Parse a date/time string as an absolute UTC instant.
///
/// Values carrying an offset (`Z`, `+02:00`) are converted to UTC; values
/// without one are assumed to already be UTC. A bare date means midnight.
pub fn parse_utc_date(value: &str) -> Result<DateTime<Utc>, DateParseError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ndt.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
        .ok_or_else(|| DateParseError(value.to_string()))
}
