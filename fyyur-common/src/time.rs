//! Timestamp utilities

use chrono::{DateTime, SubsecRound, Utc};

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Truncate an instant to whole seconds
///
/// Stored start times are kept at second resolution so their RFC 3339 text
/// sorts chronologically inside SQLite.
pub fn to_storage_precision(instant: DateTime<Utc>) -> DateTime<Utc> {
    instant.trunc_subsecs(0)
}

/// Parse a user-supplied start time
///
/// Accepts RFC 3339 (`2035-04-01T20:00:00Z`) or the naive
/// `YYYY-MM-DD HH:MM[:SS]` form used by date pickers, interpreted as UTC.
pub fn parse_start_time(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(to_storage_precision(parsed.with_timezone(&Utc)));
    }

    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| chrono::NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| to_storage_precision(naive.and_utc()))
}
