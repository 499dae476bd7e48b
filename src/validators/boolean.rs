//! Boolean validator.

use crate::error::ValidationError;

/// Pure function: parse a boolean flag.
///
/// Trimmed and case-insensitive. Accepts `true`/`1`/`yes` and `false`/`0`/`no`;
/// anything else is `None`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// A boolean flag. See [`parse_bool`] for the accepted spellings.
pub fn bool_env(raw: &str) -> Result<bool, ValidationError> {
    parse_bool(raw).ok_or_else(|| ValidationError::new("a boolean (true/false, 1/0, yes/no)", raw))
}
