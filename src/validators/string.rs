//! String validators.
//!
//! Raw values are never trimmed or case-folded here unless that is exactly what
//! the validator checks. Lengths count unicode scalar values.

use regex::Regex;

use crate::error::ValidationError;

/// Any string, returned unchanged.
pub fn string_env(raw: &str) -> Result<String, ValidationError> {
    Ok(raw.to_string())
}

/// A string with at least one non-whitespace character.
pub fn non_empty_env(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        Err(ValidationError::new("a non-empty string", raw))
    } else {
        Ok(raw.to_string())
    }
}

/// A string with no leading or trailing whitespace.
pub fn trimmed_env(raw: &str) -> Result<String, ValidationError> {
    if raw.trim() == raw {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::new(
            "a string without surrounding whitespace",
            raw,
        ))
    }
}

/// A string with no uppercase characters.
pub fn lowercase_env(raw: &str) -> Result<String, ValidationError> {
    if raw.chars().any(char::is_uppercase) {
        Err(ValidationError::new("a lowercase string", raw))
    } else {
        Ok(raw.to_string())
    }
}

/// A string with no lowercase characters.
pub fn uppercase_env(raw: &str) -> Result<String, ValidationError> {
    if raw.chars().any(char::is_lowercase) {
        Err(ValidationError::new("an uppercase string", raw))
    } else {
        Ok(raw.to_string())
    }
}

/// A string of at least `n` characters.
pub fn min_length(n: usize) -> impl Fn(&str) -> Result<String, ValidationError> {
    move |raw| {
        if raw.chars().count() < n {
            Err(ValidationError::new(
                format!("a string of at least {} characters", n),
                raw,
            ))
        } else {
            Ok(raw.to_string())
        }
    }
}

/// A string of at most `n` characters.
pub fn max_length(n: usize) -> impl Fn(&str) -> Result<String, ValidationError> {
    move |raw| {
        if raw.chars().count() > n {
            Err(ValidationError::new(
                format!("a string of at most {} characters", n),
                raw,
            ))
        } else {
            Ok(raw.to_string())
        }
    }
}

/// A string of exactly `n` characters.
pub fn length(n: usize) -> impl Fn(&str) -> Result<String, ValidationError> {
    move |raw| {
        if raw.chars().count() != n {
            Err(ValidationError::new(
                format!("a string of exactly {} characters", n),
                raw,
            ))
        } else {
            Ok(raw.to_string())
        }
    }
}

/// One of a fixed set of members, compared exactly (no trimming, no case folding).
///
/// The matching member itself is returned, so enums with an `AsRef<str>` form
/// can be used directly.
///
/// ```
/// use envguard::validators::enum_env;
///
/// let level = enum_env(["debug", "info", "warn", "error"]);
/// assert_eq!(level("warn"), Ok("warn"));
/// assert!(level("WARN").is_err());
/// assert!(level(" warn").is_err());
/// ```
pub fn enum_env<T, I>(members: I) -> impl Fn(&str) -> Result<T, ValidationError>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str> + Clone,
{
    let members: Vec<T> = members.into_iter().collect();
    let expected = format!(
        "one of [{}]",
        members
            .iter()
            .map(|m| m.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    );
    move |raw| {
        members
            .iter()
            .find(|m| m.as_ref() == raw)
            .cloned()
            .ok_or_else(|| ValidationError::new(expected.clone(), raw))
    }
}

/// A string fully matching `pattern`.
///
/// The pattern is anchored at both ends, so it must match the whole raw value
/// rather than a substring.
///
/// # Errors
///
/// Returns `regex::Error` if `pattern` does not compile.
///
/// ```
/// use envguard::validators::pattern_env;
///
/// let region = pattern_env("[a-z]{2}-[a-z]+-[0-9]").unwrap();
/// assert!(region("us-east-1").is_ok());
/// assert!(region("xus-east-1").is_err());
/// ```
pub fn pattern_env(
    pattern: &str,
) -> Result<impl Fn(&str) -> Result<String, ValidationError>, regex::Error> {
    let regex = Regex::new(&format!("^(?:{})$", pattern))?;
    let expected = format!("a string matching /{}/", pattern);
    Ok(move |raw: &str| {
        if regex.is_match(raw) {
            Ok(raw.to_string())
        } else {
            Err(ValidationError::new(expected.clone(), raw))
        }
    })
}
