//! Calendar date parsing and formatting
//!
//! Every client-facing date is normalized to a plain UTC calendar date
//! (`NaiveDate`) before storage or comparison, so range filters never
//! shift across a timezone boundary. Rendering uses the `Www Mmm DD YYYY`
//! form the log endpoints document.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Render a calendar date as e.g. `Sun Jan 15 2023`.
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Render an instant as an RFC 1123 UTC string, e.g.
/// `Sun, 15 Jan 2023 00:00:00 GMT`.
pub fn format_rfc1123(instant: &DateTime<Utc>) -> String {
    instant.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Parse a caller-supplied calendar date.
///
/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp (the date part is
/// taken). Returns `None` for anything else.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.date_naive());
    }
    None
}

/// Parse a caller-supplied instant for the timestamp endpoint.
///
/// Accepts, in order: milliseconds since the Unix epoch, an RFC 3339
/// timestamp, or `YYYY-MM-DD` (interpreted as UTC midnight).
pub fn parse_instant(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(millis) = trimmed.parse::<i64>() {
        return Utc.timestamp_millis_opt(millis).single();
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(instant.with_timezone(&Utc));
    }
    parse_calendar_date(trimmed)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
