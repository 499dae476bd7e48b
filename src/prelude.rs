//! Convenient re-exports for common envguard usage.
//!
//! ```
//! use envguard::prelude::*;
//!
//! let env = MockEnv::new()
//!     .with_env("HOST", "api.internal")
//!     .with_env("PORT", "8080");
//! let resolver = Resolver::new(&env);
//!
//! let host = resolver.get("HOST", hostname_env)?;
//! let port = resolver.get("PORT", port_env)?;
//! assert_eq!(format!("{host}:{port}"), "api.internal:8080");
//! # Ok::<(), EnvError>(())
//! ```

// ============================================================================
// Stillwater re-exports (core functional programming types)
// ============================================================================

/// Result type with error accumulation. `Resolver::check_all` returns one.
pub use stillwater::Validation;

/// Trait for combining values. `EnvErrors` implements this for error accumulation.
pub use stillwater::Semigroup;

/// Guaranteed non-empty collection. Underlying type for `EnvErrors`.
pub use stillwater::NonEmptyVec;

// ============================================================================
// Error types
// ============================================================================

/// What a validator reports: the expectation and the offending raw value.
pub use crate::error::ValidationError;

/// A resolution failure carrying the variable name(s).
pub use crate::error::EnvError;

/// Non-empty collection of errors. Implements `Semigroup` for accumulation.
pub use crate::error::EnvErrors;

/// Type alias: `Validation<T, EnvErrors>`.
pub use crate::error::EnvValidation;

/// Extension trait for creating failing validations easily.
pub use crate::error::EnvValidationExt;

// ============================================================================
// Resolution
// ============================================================================

/// Resolves declarations against an injected environment.
pub use crate::resolve::Resolver;

/// Declaration of one variable: name, validator, default and optional flag.
pub use crate::resolve::EnvVar;

/// Entry in a batch request.
pub use crate::resolve::VarSpec;

/// A default: a literal value or a lazy producer.
pub use crate::resolve::Fallback;

/// Free functions bound to the process environment.
pub use crate::resolve::{
    exists, exists_with, fetch_optional, fetch_optional_with, get, get_or, require_all,
    resolve, resolve_multiple,
};

/// Deployment environment helpers.
pub use crate::environment::{environment_name, is_development, is_production, is_test};

// ============================================================================
// Environment abstractions
// ============================================================================

/// Trait for abstracting environment access.
pub use crate::env::EnvAccessor;

/// Real environment implementation for production use.
pub use crate::env::RealEnv;

/// Mock environment for testing.
pub use crate::env::MockEnv;

// ============================================================================
// Validation
// ============================================================================

/// Trait for validators, implemented by every matching `Fn`.
pub use crate::validator::Validator;

/// Combinators on validators (`map`, `and_then`).
pub use crate::validator::ValidatorExt;

/// The built-in validator catalog.
pub use crate::validators::*;

// ============================================================================
// Value types
// ============================================================================

/// Dynamically typed result of a batch resolution.
pub use crate::value::Value;

// ============================================================================
// Pretty printing
// ============================================================================

/// Options for pretty printing errors.
pub use crate::pretty::PrettyPrintOptions;

/// Color output option.
pub use crate::pretty::ColorOption;

/// Provides `unwrap_or_exit()` for startup code.
pub use crate::pretty::ValidationExt;
