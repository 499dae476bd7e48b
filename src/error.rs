//! Error types for envguard.
//!
//! Validators fail with a [`ValidationError`]; the resolution engine wraps those
//! with the variable name into an [`EnvError`]. [`EnvErrors`] accumulates many
//! `EnvError`s through stillwater's `Validation` and `Semigroup`.

use std::fmt;

use stillwater::{NonEmptyVec, Semigroup, Validation};

/// A validator rejected a raw string.
///
/// The message always names the expected shape and echoes the rejected value
/// verbatim, quoted: `expected a port (integer 0-65535), got "abc"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, got \"{value}\"")]
pub struct ValidationError {
    /// Human-readable description of the accepted shape.
    pub expected: String,
    /// The offending raw value (or array segment), unmodified.
    pub value: String,
}

impl ValidationError {
    /// Create a validation error for a rejected raw value.
    pub fn new(expected: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            value: value.into(),
        }
    }
}

/// Failures produced by the resolution engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    /// Variable is absent, not optional, and has no default.
    #[error("missing required environment variable `{name}`")]
    Missing { name: String },

    /// Variable is present but its validator rejected the raw value.
    #[error("error parsing variable `{name}`: {source}")]
    Invalid {
        name: String,
        source: ValidationError,
    },

    /// `require_all` found absent variables. Names keep their input order.
    #[error("missing required environment variables: {}", .names.join(", "))]
    MissingVars { names: Vec<String> },

    /// `require_all` found present variables rejected by their validators.
    #[error("invalid environment variables: {}", join_names(.invalid))]
    InvalidVars {
        invalid: Vec<(String, ValidationError)>,
    },
}

fn join_names(invalid: &[(String, ValidationError)]) -> String {
    invalid
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl EnvError {
    /// Create a missing-variable error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    /// Wrap a validator failure with the variable it came from.
    pub fn invalid(name: impl Into<String>, source: ValidationError) -> Self {
        Self::Invalid {
            name: name.into(),
            source,
        }
    }

    /// Names of every variable this error is about, in order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            EnvError::Missing { name } | EnvError::Invalid { name, .. } => vec![name.as_str()],
            EnvError::MissingVars { names } => names.iter().map(String::as_str).collect(),
            EnvError::InvalidVars { invalid } => {
                invalid.iter().map(|(name, _)| name.as_str()).collect()
            }
        }
    }

    /// Check if this error reports absence rather than a bad value.
    pub fn is_missing(&self) -> bool {
        matches!(self, EnvError::Missing { .. } | EnvError::MissingVars { .. })
    }

    /// Get a suggestion for fixing this error, if available.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            EnvError::Missing { name } => Some(format!("Set '{}' in the environment", name)),
            EnvError::MissingVars { names } => {
                Some(format!("Set {} in the environment", quoted_list(names)))
            }
            EnvError::Invalid { name, source } => {
                Some(format!("Change '{}' to {}", name, source.expected))
            }
            EnvError::InvalidVars { .. } => None,
        }
    }
}

fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("'{}'", n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A non-empty collection of resolution errors.
///
/// Uses `NonEmptyVec` from stillwater so a failure always carries at least one error.
#[derive(Debug, Clone)]
pub struct EnvErrors(pub NonEmptyVec<EnvError>);

impl EnvErrors {
    /// Create from a single error.
    pub fn single(error: EnvError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Try to create from a vec, returning None if empty.
    pub fn from_vec(errors: Vec<EnvError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Get the first error (always exists).
    pub fn first(&self) -> &EnvError {
        self.0.head()
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over errors.
    pub fn iter(&self) -> impl Iterator<Item = &EnvError> {
        self.0.iter()
    }

    /// Split into missing-variable and invalid-value errors, preserving order.
    pub fn partition_missing(&self) -> (Vec<&EnvError>, Vec<&EnvError>) {
        self.iter().partition(|e| e.is_missing())
    }
}

impl Semigroup for EnvErrors {
    fn combine(self, other: Self) -> Self {
        Self(self.0.combine(other.0))
    }
}

impl From<EnvError> for EnvErrors {
    fn from(error: EnvError) -> Self {
        Self::single(error)
    }
}

impl IntoIterator for EnvErrors {
    type Item = EnvError;
    type IntoIter = std::vec::IntoIter<EnvError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl fmt::Display for EnvErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Environment errors ({}):", self.len())?;
        for error in self.iter() {
            writeln!(f, "  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for EnvErrors {}

/// Accumulating result type: `Validation<T, EnvErrors>`.
pub type EnvValidation<T> = Validation<T, EnvErrors>;

/// Extension trait for creating failing validations easily.
pub trait EnvValidationExt<T> {
    /// Create a failing validation with a single error.
    fn fail_with(error: EnvError) -> EnvValidation<T>;

    /// Convert into a `Result`, keeping every accumulated error.
    fn into_result(self) -> Result<T, EnvErrors>;
}

impl<T> EnvValidationExt<T> for EnvValidation<T> {
    fn fail_with(error: EnvError) -> EnvValidation<T> {
        Validation::Failure(EnvErrors::single(error))
    }

    fn into_result(self) -> Result<T, EnvErrors> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => Err(errors),
        }
    }
}
