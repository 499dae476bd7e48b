//! Numeric validators.
//!
//! All of these share one number grammar: the raw string must not be blank,
//! surrounding whitespace is ignored, and the rest must parse as a finite `f64`
//! (`42`, `-1.5`, `1e3`). Integral variants also reject a fractional part, so
//! `"8080.0"` is a valid port but `"8080.5"` is not.

use crate::error::ValidationError;

/// Largest integer an `f64` represents exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Pure function: parse a number with the shared grammar.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Pure function: parse an integral number with the shared grammar.
pub(crate) fn parse_integer(raw: &str) -> Option<i64> {
    parse_number(raw)
        .filter(|n| n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER)
        .map(|n| n as i64)
}

/// Any finite number.
pub fn number_env(raw: &str) -> Result<f64, ValidationError> {
    parse_number(raw).ok_or_else(|| ValidationError::new("a number", raw))
}

/// A number with no fractional part.
pub fn integer_env(raw: &str) -> Result<i64, ValidationError> {
    parse_integer(raw).ok_or_else(|| ValidationError::new("an integer", raw))
}

/// A number in `[min, max]`, both ends inclusive.
///
/// ```
/// use envguard::validators::range_env;
///
/// let workers = range_env(1.0, 10.0);
/// assert_eq!(workers("1"), Ok(1.0));
/// assert_eq!(workers("10"), Ok(10.0));
/// assert!(workers("0").is_err());
/// assert!(workers("11").is_err());
/// ```
pub fn range_env(min: f64, max: f64) -> impl Fn(&str) -> Result<f64, ValidationError> {
    move |raw| {
        parse_number(raw)
            .filter(|n| (min..=max).contains(n))
            .ok_or_else(|| {
                ValidationError::new(format!("a number between {} and {}", min, max), raw)
            })
    }
}

/// A number greater than or equal to `min`.
pub fn min_env(min: f64) -> impl Fn(&str) -> Result<f64, ValidationError> {
    move |raw| {
        parse_number(raw)
            .filter(|n| *n >= min)
            .ok_or_else(|| ValidationError::new(format!("a number >= {}", min), raw))
    }
}

/// A number less than or equal to `max`.
pub fn max_env(max: f64) -> impl Fn(&str) -> Result<f64, ValidationError> {
    move |raw| {
        parse_number(raw)
            .filter(|n| *n <= max)
            .ok_or_else(|| ValidationError::new(format!("a number <= {}", max), raw))
    }
}

/// A number strictly greater than zero.
pub fn positive_env(raw: &str) -> Result<f64, ValidationError> {
    parse_number(raw)
        .filter(|n| *n > 0.0)
        .ok_or_else(|| ValidationError::new("a positive number", raw))
}

/// A number greater than or equal to zero.
pub fn non_negative_env(raw: &str) -> Result<f64, ValidationError> {
    parse_number(raw)
        .filter(|n| *n >= 0.0)
        .ok_or_else(|| ValidationError::new("a non-negative number", raw))
}

/// A number strictly less than zero.
pub fn negative_env(raw: &str) -> Result<f64, ValidationError> {
    parse_number(raw)
        .filter(|n| *n < 0.0)
        .ok_or_else(|| ValidationError::new("a negative number", raw))
}

/// A percentage in `[0, 100]`.
pub fn percentage_env(raw: &str) -> Result<f64, ValidationError> {
    parse_number(raw)
        .filter(|n| (0.0..=100.0).contains(n))
        .ok_or_else(|| ValidationError::new("a percentage between 0 and 100", raw))
}

/// A latitude in `[-90, 90]`.
pub fn latitude_env(raw: &str) -> Result<f64, ValidationError> {
    parse_number(raw)
        .filter(|n| (-90.0..=90.0).contains(n))
        .ok_or_else(|| ValidationError::new("a latitude between -90 and 90", raw))
}

/// A longitude in `[-180, 180]`.
pub fn longitude_env(raw: &str) -> Result<f64, ValidationError> {
    parse_number(raw)
        .filter(|n| (-180.0..=180.0).contains(n))
        .ok_or_else(|| ValidationError::new("a longitude between -180 and 180", raw))
}

/// A TCP/UDP port: an integer in `[0, 65535]`.
pub fn port_env(raw: &str) -> Result<u16, ValidationError> {
    parse_integer(raw)
        .and_then(|n| u16::try_from(n).ok())
        .ok_or_else(|| ValidationError::new("a port (integer 0-65535)", raw))
}

/// A unix timestamp in seconds: a non-negative integer.
pub fn timestamp_env(raw: &str) -> Result<i64, ValidationError> {
    parse_integer(raw)
        .filter(|n| *n >= 0)
        .ok_or_else(|| ValidationError::new("a unix timestamp (non-negative integer)", raw))
}
