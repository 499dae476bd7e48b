//! The resolution engine.
//!
//! Resolution ties a variable name, a validator, an optional default and an
//! "optional" flag into one outcome:
//!
//! 1. Look the name up through the injected [`EnvAccessor`].
//! 2. Absent: optional wins and yields `None`; otherwise a default (value or
//!    producer) is returned as-is; otherwise the variable is missing.
//! 3. Present: the validator runs on the raw string and any failure is wrapped
//!    with the variable name.
//!
//! Defaults never pass through the validator, and a validation failure never
//! falls back to the default.
//!
//! # Example
//!
//! ```
//! use envguard::prelude::*;
//!
//! let env = MockEnv::new()
//!     .with_env("PORT", "8080")
//!     .with_env("DEBUG", "yes");
//! let resolver = Resolver::new(&env);
//!
//! let port = resolver.get("PORT", port_env)?;
//! let debug = resolver.get("DEBUG", bool_env)?;
//! let workers = resolver.resolve(EnvVar::new("WORKERS", integer_env).default_value(4))?;
//! let sentry = resolver.resolve(EnvVar::new("SENTRY_DSN", url_env).optional())?;
//!
//! assert_eq!(port, 8080);
//! assert!(debug);
//! assert_eq!(workers, Some(4));
//! assert!(sentry.is_none());
//! # Ok::<(), envguard::EnvError>(())
//! ```

use std::fmt;

use stillwater::{NonEmptyVec, Validation};

use crate::env::{EnvAccessor, RealEnv};
use crate::error::{EnvError, EnvErrors, EnvValidation, ValidationError};
use crate::validator::{Erased, ValueValidator, Validator};
use crate::value::Value;

/// Default variable holding the deployment environment name.
pub const DEFAULT_ENVIRONMENT_VAR: &str = "APP_ENV";

/// Fallback used when a variable is absent.
pub enum Fallback<T> {
    /// A ready value.
    Value(T),
    /// A producer invoked only when the fallback is actually needed.
    Producer(Box<dyn FnOnce() -> T>),
}

impl<T> Fallback<T> {
    /// Produce the fallback value.
    pub fn into_value(self) -> T {
        match self {
            Fallback::Value(value) => value,
            Fallback::Producer(produce) => produce(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Fallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Fallback::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// A single typed resolution request.
///
/// `optional` and the default are independent settings. Optional is checked
/// first, so a variable that is both optional and defaulted resolves to `None`
/// when absent.
///
/// # Example
///
/// ```
/// use envguard::prelude::*;
///
/// let timeout = EnvVar::new("TIMEOUT_SECS", range_env(1.0, 300.0)).default_value(30.0);
/// let token = EnvVar::new("API_TOKEN", min_length(32));
/// let region = EnvVar::new("REGION", string_env).default_with(|| "us-east-1".to_string());
/// # let _ = (timeout, token, region);
/// ```
pub struct EnvVar<T, V> {
    name: String,
    validator: V,
    optional: bool,
    fallback: Option<Fallback<T>>,
}

impl<T, V> EnvVar<T, V>
where
    V: Validator<T>,
{
    /// Create a required request for `name`.
    pub fn new(name: impl Into<String>, validator: V) -> Self {
        Self {
            name: name.into(),
            validator,
            optional: false,
            fallback: None,
        }
    }

    /// Resolve to `None` instead of failing when the variable is absent.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Use `value` when the variable is absent. It is not validated.
    pub fn default_value(mut self, value: T) -> Self {
        self.fallback = Some(Fallback::Value(value));
        self
    }

    /// Call `produce` when the variable is absent. Its result is not validated.
    pub fn default_with(mut self, produce: impl FnOnce() -> T + 'static) -> Self {
        self.fallback = Some(Fallback::Producer(Box::new(produce)));
        self
    }

    /// The variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the request is optional.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Whether the request carries a default.
    pub fn has_default(&self) -> bool {
        self.fallback.is_some()
    }
}

impl<T: fmt::Debug, V> fmt::Debug for EnvVar<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVar")
            .field("name", &self.name)
            .field("optional", &self.optional)
            .field("fallback", &self.fallback)
            .finish_non_exhaustive()
    }
}

/// One entry of a batch operation: a name, optionally with a validator.
///
/// Batch results are erased to [`Value`] so validators with different result
/// types can share one ordered list.
///
/// ```
/// use envguard::prelude::*;
///
/// let specs = vec![
///     VarSpec::new("DATABASE_URL"),
///     VarSpec::typed("PORT", port_env),
///     VarSpec::typed("FEATURES", array_env(",")),
/// ];
/// # let _ = specs;
/// ```
pub struct VarSpec {
    name: String,
    validator: Option<Box<dyn ValueValidator>>,
}

impl VarSpec {
    /// A bare name: presence only, raw string returned as-is.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            validator: None,
        }
    }

    /// A name with a validator applied when the variable is present.
    pub fn typed<T, V>(name: impl Into<String>, validator: V) -> Self
    where
        V: Validator<T> + Send + Sync + 'static,
        T: Into<Value> + 'static,
    {
        Self {
            name: name.into(),
            validator: Some(Box::new(Erased::new(validator))),
        }
    }

    /// The variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the validator (if any) to a present raw value.
    fn check(&self, raw: String) -> Result<Value, EnvError> {
        match &self.validator {
            Some(validator) => validator
                .validate_value(&raw)
                .map_err(|source| invalid(&self.name, source)),
            None => Ok(Value::String(raw)),
        }
    }
}

impl From<&str> for VarSpec {
    fn from(name: &str) -> Self {
        VarSpec::new(name)
    }
}

impl From<String> for VarSpec {
    fn from(name: String) -> Self {
        VarSpec::new(name)
    }
}

impl fmt::Debug for VarSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VarSpec")
            .field("name", &self.name)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

fn invalid(name: &str, source: ValidationError) -> EnvError {
    tracing::debug!(variable = name, expected = %source.expected, "validation failed");
    EnvError::invalid(name, source)
}

/// Resolves variables against an injected [`EnvAccessor`].
///
/// The resolver holds no state beyond its configuration, so it is cheap to
/// create and safe to share across threads.
#[derive(Clone, Copy)]
pub struct Resolver<'e> {
    env: &'e dyn EnvAccessor,
    environment_var: &'e str,
}

impl fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("environment_var", &self.environment_var)
            .finish_non_exhaustive()
    }
}

impl Resolver<'static> {
    /// Resolver over the real process environment.
    pub fn system() -> Self {
        Resolver::new(&RealEnv)
    }
}

impl<'e> Resolver<'e> {
    /// Create a resolver reading from `env`.
    pub fn new(env: &'e dyn EnvAccessor) -> Self {
        Self {
            env,
            environment_var: DEFAULT_ENVIRONMENT_VAR,
        }
    }

    /// Read the environment name from `name` instead of `APP_ENV`.
    pub fn with_environment_var(mut self, name: &'e str) -> Self {
        self.environment_var = name;
        self
    }

    /// The variable the environment-name helpers read.
    pub fn environment_var(&self) -> &str {
        self.environment_var
    }

    pub(crate) fn lookup(&self, name: &str) -> Option<String> {
        let raw = self.env.get_env(name);
        tracing::trace!(variable = name, present = raw.is_some(), "lookup");
        raw
    }

    /// Resolve one request.
    ///
    /// Returns `Ok(None)` only when the request is optional and the variable is absent.
    ///
    /// # Errors
    ///
    /// - `EnvError::Missing` if absent, not optional and without a default
    /// - `EnvError::Invalid` if present and rejected by the validator
    pub fn resolve<T, V>(&self, var: EnvVar<T, V>) -> Result<Option<T>, EnvError>
    where
        V: Validator<T>,
    {
        let EnvVar {
            name,
            validator,
            optional,
            fallback,
        } = var;

        match self.lookup(&name) {
            Some(raw) => validator
                .validate(&raw)
                .map(Some)
                .map_err(|source| invalid(&name, source)),
            None if optional => {
                tracing::debug!(variable = %name, "optional variable not set");
                Ok(None)
            }
            None => match fallback {
                Some(fallback) => {
                    tracing::debug!(variable = %name, "variable not set, using default");
                    Ok(Some(fallback.into_value()))
                }
                None => Err(EnvError::missing(name)),
            },
        }
    }

    /// Resolve a required variable with no default.
    ///
    /// # Errors
    ///
    /// Same as [`Resolver::resolve`].
    pub fn get<T, V>(&self, name: &str, validator: V) -> Result<T, EnvError>
    where
        V: Validator<T>,
    {
        let raw = self.lookup(name).ok_or_else(|| EnvError::missing(name))?;
        validator
            .validate(&raw)
            .map_err(|source| invalid(name, source))
    }

    /// Resolve a variable, falling back to `default` when absent.
    ///
    /// # Errors
    ///
    /// `EnvError::Invalid` if present and rejected by the validator.
    pub fn get_or<T, V>(&self, name: &str, validator: V, default: T) -> Result<T, EnvError>
    where
        V: Validator<T>,
    {
        match self.lookup(name) {
            Some(raw) => validator
                .validate(&raw)
                .map_err(|source| invalid(name, source)),
            None => {
                tracing::debug!(variable = name, "variable not set, using default");
                Ok(default)
            }
        }
    }

    /// Resolve a request, reporting the failure as an accumulating validation.
    ///
    /// Combine several with `Validation::all_vec` (or stillwater's tuple `all`)
    /// to collect every problem in one pass.
    pub fn validate<T, V>(&self, var: EnvVar<T, V>) -> EnvValidation<Option<T>>
    where
        V: Validator<T>,
    {
        match self.resolve(var) {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(EnvErrors::single(error)),
        }
    }

    /// Look up and validate every entry, in order.
    ///
    /// Absent entries become `None` (no default or optional policy applies);
    /// entries without a validator yield the raw string.
    ///
    /// # Errors
    ///
    /// The first `EnvError::Invalid`, in input order.
    pub fn resolve_multiple<I>(&self, specs: I) -> Result<Vec<Option<Value>>, EnvError>
    where
        I: IntoIterator,
        I::Item: Into<VarSpec>,
    {
        specs
            .into_iter()
            .map(Into::into)
            .map(|spec: VarSpec| self.lookup(&spec.name).map(|raw| spec.check(raw)).transpose())
            .collect()
    }

    /// Like [`Resolver::resolve_multiple`] but accumulates every invalid entry.
    pub fn check_all<I>(&self, specs: I) -> EnvValidation<Vec<Option<Value>>>
    where
        I: IntoIterator,
        I::Item: Into<VarSpec>,
    {
        let results: Vec<EnvValidation<Option<Value>>> = specs
            .into_iter()
            .map(Into::into)
            .map(|spec: VarSpec| match self.lookup(&spec.name) {
                None => Validation::Success(None),
                Some(raw) => match spec.check(raw) {
                    Ok(value) => Validation::Success(Some(value)),
                    Err(error) => Validation::Failure(EnvErrors::single(error)),
                },
            })
            .collect();
        Validation::all_vec(results)
    }

    /// Require every entry to be present and valid.
    ///
    /// Missing names are reported first; only if none are missing are the present
    /// values validated. Each failure lists every offending name in input order.
    ///
    /// # Errors
    ///
    /// - `EnvError::MissingVars` with every absent name
    /// - `EnvError::InvalidVars` with every rejected name, when nothing is missing
    pub fn require_all<'s, I>(&self, specs: I) -> Result<(), EnvError>
    where
        I: IntoIterator<Item = &'s VarSpec>,
    {
        let presence: Vec<Validation<(&VarSpec, String), NonEmptyVec<String>>> = specs
            .into_iter()
            .map(|spec| match self.lookup(&spec.name) {
                Some(raw) => Validation::Success((spec, raw)),
                None => Validation::Failure(NonEmptyVec::singleton(spec.name.clone())),
            })
            .collect();

        let present = match Validation::all_vec(presence) {
            Validation::Success(present) => present,
            Validation::Failure(missing) => {
                let names = missing.into_vec();
                tracing::debug!(count = names.len(), "required variables missing");
                return Err(EnvError::MissingVars { names });
            }
        };

        let invalid: Vec<(String, ValidationError)> = present
            .into_iter()
            .filter_map(|(spec, raw)| {
                let validator = spec.validator.as_ref()?;
                validator
                    .validate_value(&raw)
                    .err()
                    .map(|source| (spec.name.clone(), source))
            })
            .collect();

        if invalid.is_empty() {
            Ok(())
        } else {
            tracing::debug!(count = invalid.len(), "required variables invalid");
            Err(EnvError::InvalidVars { invalid })
        }
    }

    /// True iff the variable is present (empty counts as present).
    pub fn exists(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// True iff the variable is present and `validator` accepts it.
    ///
    /// Validator failures collapse to `false`; they are never reported.
    pub fn exists_with<T, V>(&self, name: &str, validator: V) -> bool
    where
        V: Validator<T>,
    {
        self.lookup(name)
            .is_some_and(|raw| validator.validate(&raw).is_ok())
    }

    /// The raw value, or `None` when absent.
    pub fn fetch_optional(&self, name: &str) -> Option<String> {
        self.lookup(name)
    }

    /// The validated value, or `None` when absent.
    ///
    /// # Errors
    ///
    /// `EnvError::Invalid` if present and rejected. Unlike [`Resolver::exists_with`],
    /// failures are not swallowed.
    pub fn fetch_optional_with<T, V>(&self, name: &str, validator: V) -> Result<Option<T>, EnvError>
    where
        V: Validator<T>,
    {
        self.lookup(name)
            .map(|raw| {
                validator
                    .validate(&raw)
                    .map_err(|source| invalid(name, source))
            })
            .transpose()
    }
}

/// [`Resolver::resolve`] against the process environment.
pub fn resolve<T, V: Validator<T>>(var: EnvVar<T, V>) -> Result<Option<T>, EnvError> {
    Resolver::system().resolve(var)
}

/// [`Resolver::get`] against the process environment.
pub fn get<T, V: Validator<T>>(name: &str, validator: V) -> Result<T, EnvError> {
    Resolver::system().get(name, validator)
}

/// [`Resolver::get_or`] against the process environment.
pub fn get_or<T, V: Validator<T>>(name: &str, validator: V, default: T) -> Result<T, EnvError> {
    Resolver::system().get_or(name, validator, default)
}

/// [`Resolver::resolve_multiple`] against the process environment.
pub fn resolve_multiple<I>(specs: I) -> Result<Vec<Option<Value>>, EnvError>
where
    I: IntoIterator,
    I::Item: Into<VarSpec>,
{
    Resolver::system().resolve_multiple(specs)
}

/// [`Resolver::require_all`] against the process environment.
pub fn require_all<'s, I>(specs: I) -> Result<(), EnvError>
where
    I: IntoIterator<Item = &'s VarSpec>,
{
    Resolver::system().require_all(specs)
}

/// [`Resolver::exists`] against the process environment.
pub fn exists(name: &str) -> bool {
    Resolver::system().exists(name)
}

/// [`Resolver::exists_with`] against the process environment.
pub fn exists_with<T, V: Validator<T>>(name: &str, validator: V) -> bool {
    Resolver::system().exists_with(name, validator)
}

/// [`Resolver::fetch_optional`] against the process environment.
pub fn fetch_optional(name: &str) -> Option<String> {
    Resolver::system().fetch_optional(name)
}

/// [`Resolver::fetch_optional_with`] against the process environment.
pub fn fetch_optional_with<T, V: Validator<T>>(
    name: &str,
    validator: V,
) -> Result<Option<T>, EnvError> {
    Resolver::system().fetch_optional_with(name, validator)
}
