//! Timestamp parsing and rendering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serializer;

use crate::{Result, ScrapeError};

/// Format used when rendering whole-second timestamps to text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used when the timestamp carries a sub-second part.
const FRACTIONAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Zone-aware layouts tried after RFC 3339 and RFC 2822.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// Date-time layouts without a zone, interpreted as UTC.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts, interpreted as midnight UTC.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %b %Y", "%d %B %Y", "%b %d %Y",
    "%B %d %Y", "%b %d, %Y", "%B %d, %Y",
];

/// Parses free-form date/time text into a UTC timestamp.
///
/// Accepts RFC 3339, RFC 2822 and a set of common date and date-time
/// layouts. Text without a zone is taken as UTC.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidTimestamp`] if no layout matches.
///
/// # Example
///
/// ```
/// use stockscrape_types::parse_timestamp;
///
/// let ts = parse_timestamp("2024-01-15 12:30:45").unwrap();
/// assert_eq!(ts.to_rfc3339(), "2024-01-15T12:30:45+00:00");
/// ```
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ScrapeError::InvalidTimestamp(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(text, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date.and_time(NaiveTime::MIN).and_utc());
        }
    }

    Err(ScrapeError::InvalidTimestamp(input.to_string()))
}

/// Converts epoch seconds (fractional allowed) into a UTC timestamp.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidTimestamp`] for non-finite or out of range values.
pub fn from_epoch_seconds(seconds: f64) -> Result<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(ScrapeError::InvalidTimestamp(seconds.to_string()));
    }
    let whole = seconds.floor();
    let nanos = (((seconds - whole) * 1e9).round() as u32).min(999_999_999);
    DateTime::from_timestamp(whole as i64, nanos)
        .ok_or_else(|| ScrapeError::InvalidTimestamp(seconds.to_string()))
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS`, adding microseconds
/// (`.ffffff`) only when the timestamp has a sub-second part.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(layout(timestamp)).to_string()
}

fn layout(timestamp: &DateTime<Utc>) -> &'static str {
    if timestamp.timestamp_subsec_micros() == 0 {
        TIMESTAMP_FORMAT
    } else {
        FRACTIONAL_TIMESTAMP_FORMAT
    }
}

pub(crate) fn serialize_timestamp<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(layout(timestamp)))
}
