//! JSON validators.
//!
//! Failures echo the raw string only; the parser's own diagnostics are not part
//! of the message.

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Any well-formed JSON document.
pub fn json_env(raw: &str) -> Result<serde_json::Value, ValidationError> {
    serde_json::from_str(raw).map_err(|_| ValidationError::new("valid JSON", raw))
}

/// JSON deserialized straight into `T`.
///
/// ```
/// use envguard::validators::json_as;
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Limits {
///     burst: u32,
/// }
///
/// let limits = json_as::<Limits>();
/// assert_eq!(limits(r#"{"burst": 10}"#), Ok(Limits { burst: 10 }));
/// assert!(limits(r#"{"burst": "ten"}"#).is_err());
/// ```
pub fn json_as<T: DeserializeOwned>() -> impl Fn(&str) -> Result<T, ValidationError> {
    |raw| {
        serde_json::from_str(raw).map_err(|_| {
            ValidationError::new(
                format!("JSON matching {}", std::any::type_name::<T>()),
                raw,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_json_accepts_documents() {
        assert_eq!(json_env("42"), Ok(serde_json::json!(42)));
        assert_eq!(
            json_env(r#"{"a": [1, 2]}"#),
            Ok(serde_json::json!({"a": [1, 2]}))
        );
        assert_eq!(json_env("null"), Ok(serde_json::Value::Null));
    }

    #[test]
    fn test_json_error_names_raw_only() {
        let err = json_env("{not json").unwrap_err();
        assert_eq!(err.to_string(), "expected valid JSON, got \"{not json\"");
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Feature {
        name: String,
        enabled: bool,
    }

    #[test]
    fn test_json_as_typed() {
        let features = json_as::<Vec<Feature>>();
        let parsed = features(r#"[{"name": "beta", "enabled": true}]"#).unwrap();
        assert_eq!(
            parsed,
            vec![Feature {
                name: "beta".to_string(),
                enabled: true
            }]
        );

        let err = features(r#"[{"name": "beta"}]"#).unwrap_err();
        assert_eq!(err.value, r#"[{"name": "beta"}]"#);
    }
}
