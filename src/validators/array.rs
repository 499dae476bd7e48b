//! Array validators.
//!
//! The raw string is split on a separator, each segment is trimmed, empty
//! segments are dropped, and every remaining segment goes through a scalar rule.
//! A failing segment fails the whole value and is the one echoed in the error.

use crate::error::ValidationError;

use super::boolean::parse_bool;
use super::numeric::{parse_integer, parse_number};

/// Pure function: split, trim, drop empties, then map each segment.
fn split_segments<T>(
    raw: &str,
    separator: &str,
    expected: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<T>, ValidationError> {
    raw.split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(|segment| parse(segment).ok_or_else(|| ValidationError::new(expected, segment)))
        .collect()
}

/// A list of strings.
///
/// ```
/// use envguard::validators::array_env;
///
/// let hosts = array_env(",");
/// assert_eq!(hosts("a,, b ,").unwrap(), vec!["a", "b"]);
/// ```
pub fn array_env(separator: &str) -> impl Fn(&str) -> Result<Vec<String>, ValidationError> {
    let separator = separator.to_string();
    move |raw| split_segments(raw, &separator, "a string", |s| Some(s.to_string()))
}

/// A list of numbers.
pub fn number_array_env(separator: &str) -> impl Fn(&str) -> Result<Vec<f64>, ValidationError> {
    let separator = separator.to_string();
    move |raw| split_segments(raw, &separator, "a number", parse_number)
}

/// A list of integers.
pub fn integer_array_env(separator: &str) -> impl Fn(&str) -> Result<Vec<i64>, ValidationError> {
    let separator = separator.to_string();
    move |raw| split_segments(raw, &separator, "an integer", parse_integer)
}

/// A list of booleans.
pub fn boolean_array_env(
    separator: &str,
) -> impl Fn(&str) -> Result<Vec<bool>, ValidationError> {
    let separator = separator.to_string();
    move |raw| {
        split_segments(
            raw,
            &separator,
            "a boolean (true/false, 1/0, yes/no)",
            parse_bool,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_split_and_trim() {
        let v = array_env(",");
        assert_eq!(v("a,b,c").unwrap(), vec!["a", "b", "c"]);
        assert_eq!(v("a,, b ,").unwrap(), vec!["a", "b"]);
        assert_eq!(v("").unwrap(), Vec::<String>::new());
        assert_eq!(v(" , ,").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_array_custom_separator() {
        let v = array_env(";");
        assert_eq!(v("a;b,c").unwrap(), vec!["a", "b,c"]);

        let multi = array_env("::");
        assert_eq!(multi("x::y").unwrap(), vec!["x", "y"]);
    }

    #[test]
    fn test_number_array() {
        let v = number_array_env(",");
        assert_eq!(v("1,2,3").unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(v("1.5, -2").unwrap(), vec![1.5, -2.0]);
    }

    #[test]
    fn test_number_array_names_offending_segment() {
        let err = number_array_env(",")("1, two ,3").unwrap_err();
        assert_eq!(err.value, "two");
        assert!(err.to_string().contains("\"two\""));
        assert!(!err.to_string().contains("1, two ,3"));
    }

    #[test]
    fn test_integer_array() {
        let v = integer_array_env(",");
        assert_eq!(v("10, 20").unwrap(), vec![10, 20]);
        assert_eq!(v("10,2.5").unwrap_err().value, "2.5");
    }

    #[test]
    fn test_boolean_array() {
        let v = boolean_array_env("|");
        assert_eq!(v("true|NO| 1 ").unwrap(), vec![true, false, true]);
        assert_eq!(v("true|maybe").unwrap_err().value, "maybe");
    }
}
