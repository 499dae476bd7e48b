//! Envguard: validated environment variables for application startup.
//!
//! Envguard reads variables through an injectable accessor, runs each raw string
//! through a validator, and reports every problem it finds with the variable name
//! attached. It uses stillwater's functional patterns for error accumulation.
//!
//! # Core Concepts
//!
//! - **Validators**: Any `Fn(&str) -> Result<T, ValidationError>` is a validator
//! - **Declarations**: `EnvVar` ties a name to a validator, default and optional flag
//! - **Batch Checks**: Resolve or require many variables and see every failure at once
//! - **Testable I/O**: Dependency injection via the `EnvAccessor` trait
//!
//! # Quick Start
//!
//! ```
//! use envguard::prelude::*;
//!
//! let env = MockEnv::new()
//!     .with_env("DATABASE_URL", "postgres://db.internal/app")
//!     .with_env("PORT", "8080");
//! let resolver = Resolver::new(&env);
//!
//! resolver.require_all(&[
//!     VarSpec::typed("DATABASE_URL", postgres_uri_env),
//!     VarSpec::typed("PORT", port_env),
//! ])?;
//!
//! let port = resolver.get("PORT", port_env)?;
//! let pool = resolver.get_or("POOL_SIZE", range_env(1.0, 64.0), 10.0)?;
//! let region = resolver.resolve(EnvVar::new("REGION", string_env).optional())?;
//!
//! assert_eq!(port, 8080);
//! assert_eq!(pool, 10.0);
//! assert_eq!(region, None);
//! # Ok::<(), EnvError>(())
//! ```
//!
//! # Import Patterns
//!
//! For most users, import the prelude:
//!
//! ```
//! use envguard::prelude::*;
//! ```
//!
//! Or import only what you need:
//!
//! ```
//! use envguard::{Resolver, EnvVar};
//! use envguard::validators::{port_env, bool_env};
//! ```
//!
//! # Writing Validators
//!
//! A validator is a plain function or closure. Parametrized validators are
//! factories that return one:
//!
//! ```
//! use envguard::prelude::*;
//!
//! fn even(raw: &str) -> Result<i64, ValidationError> {
//!     integer_env(raw).and_then(|n| {
//!         if n % 2 == 0 {
//!             Ok(n)
//!         } else {
//!             Err(ValidationError::new("an even integer", raw))
//!         }
//!     })
//! }
//!
//! let env = MockEnv::new().with_env("SHARDS", "4");
//! assert_eq!(Resolver::new(&env).get("SHARDS", even).unwrap(), 4);
//! ```
//!
//! # Architecture
//!
//! Envguard follows the "pure core, imperative shell" pattern:
//!
//! - **Pure Core**: Validators are pure functions from a raw string to a typed value
//! - **Imperative Shell**: Lookups go through the `EnvAccessor` trait
//!
//! # Module Structure
//!
//! - [`prelude`]: Convenient re-exports for common usage
//! - [`resolve`]: `Resolver`, `EnvVar`, `VarSpec` and the free-function shortcuts
//! - [`environment`]: Deployment environment name helpers
//! - [`validators`]: The built-in validator catalog
//! - [`validator`]: The `Validator` trait and combinators
//! - [`error`]: Error types (`ValidationError`, `EnvError`, `EnvErrors`)
//! - [`value`]: `Value` enum for batch results
//! - [`mod@env`]: `EnvAccessor` trait and `MockEnv` for testing
//! - [`pretty`]: Human-readable startup reports
//!
//! # Logging
//!
//! Resolution emits `tracing` events at `debug` (failures) and `trace`
//! (lookups). Raw values are never recorded, only names and expectations.

pub mod env;
pub mod environment;
pub mod error;
pub mod prelude;
pub mod pretty;
pub mod resolve;
pub mod validator;
pub mod validators;
pub mod value;

// Re-exports for convenience
pub use env::{EnvAccessor, MockEnv, RealEnv};
pub use environment::{
    environment_name, is_development, is_production, is_test, DEFAULT_ENVIRONMENT,
};
pub use error::{EnvError, EnvErrors, EnvValidation, EnvValidationExt, ValidationError};
pub use pretty::{ColorOption, PrettyPrintOptions, ValidationExt};
pub use resolve::{
    exists, exists_with, fetch_optional, fetch_optional_with, get, get_or, require_all,
    resolve, resolve_multiple, EnvVar, Fallback, Resolver, VarSpec, DEFAULT_ENVIRONMENT_VAR,
};
pub use validator::{Erased, Validator, ValidatorExt, ValueValidator};
pub use value::Value;

// Re-export stillwater types that are commonly used
pub use stillwater::{NonEmptyVec, Semigroup, Validation};
