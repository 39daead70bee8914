//! Timestamp helpers.
//!
//! Records carry ISO-8601 strings. Ordering parses them leniently: RFC 3339,
//! a datetime with no offset (read as UTC), or a bare `YYYY-MM-DD` date.
//! Anything else sorts as the epoch.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// The epoch as written on records that carry no timestamp.
pub const EPOCH_ISO: &str = "1970-01-01T00:00:00.000Z";

/// Current time as ISO-8601 UTC with millisecond precision.
#[must_use]
pub fn now_iso() -> String {
    to_iso(Utc::now())
}

/// Format a time the way records store it.
#[must_use]
pub fn to_iso(time: DateTime<Utc>) -> String {
    time.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Milliseconds since the epoch, or `0` when unparsable.
#[must_use]
pub fn sort_millis(ts: &str) -> i64 {
    let ts = ts.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(ts) {
        return parsed.timestamp_millis();
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc().timestamp_millis();
    }
    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or(0, |dt| dt.and_utc().timestamp_millis())
}
