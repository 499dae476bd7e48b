//! Date validators.
//!
//! Prefer [`iso_date_env`]. [`date_env`] is deliberately permissive: it accepts
//! several common layouts and exists for values written by hand, where strictness
//! would only get in the way. Its accepted set is a documented list, not "anything
//! a date parser might understand".

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::ValidationError;

/// Naive date-time layouts accepted by [`date_env`], interpreted as UTC.
const DATETIME_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts accepted by [`date_env`], at midnight UTC.
const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d %b %Y", "%b %d, %Y"];

fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

/// An ISO 8601 timestamp: RFC 3339 (`2024-05-01T12:00:00Z`, offsets allowed)
/// or a calendar date (`2024-05-01`, taken as midnight UTC).
pub fn iso_date_env(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(midnight_utc)
        })
        .ok_or_else(|| ValidationError::new("an ISO 8601 date", raw))
}

/// A date in any of several common layouts: RFC 3339, RFC 2822, the naive
/// layouts in `DATETIME_LAYOUTS` / `DATE_LAYOUTS`, or unix seconds. Surrounding
/// whitespace is ignored.
pub fn date_env(raw: &str) -> Result<DateTime<Utc>, ValidationError> {
    let trimmed = raw.trim();
    parse_permissive(trimmed).ok_or_else(|| ValidationError::new("a date", raw))
}

fn parse_permissive(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
    {
        return Some(dt.and_utc());
    }
    if let Some(date) = DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(s, layout).ok())
    {
        return midnight_utc(date);
    }
    s.parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
