//! The validator contract.
//!
//! A validator turns one raw string into a typed value or fails with a
//! [`ValidationError`]. It inspects nothing but its argument, so the same input
//! always yields the same outcome.
//!
//! Any `Fn(&str) -> Result<T, ValidationError>` is a validator, which means plain
//! functions (`port_env`) and closures returned by factories (`range_env(1.0, 10.0)`)
//! are interchangeable.

use std::marker::PhantomData;

use crate::error::ValidationError;
use crate::value::Value;

/// Parse-or-fail contract shared by every validator.
///
/// # Example
///
/// ```
/// use envguard::{ValidationError, Validator};
///
/// fn even(raw: &str) -> Result<u32, ValidationError> {
///     raw.parse::<u32>()
///         .ok()
///         .filter(|n| n % 2 == 0)
///         .ok_or_else(|| ValidationError::new("an even number", raw))
/// }
///
/// assert_eq!(even.validate("4"), Ok(4));
/// assert!(even.validate("5").is_err());
/// ```
pub trait Validator<T> {
    /// Convert `raw` into a typed value.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` that echoes `raw` (or the offending part of it).
    fn validate(&self, raw: &str) -> Result<T, ValidationError>;
}

impl<T, F> Validator<T> for F
where
    F: Fn(&str) -> Result<T, ValidationError>,
{
    fn validate(&self, raw: &str) -> Result<T, ValidationError> {
        self(raw)
    }
}

/// Combinators available on every validator.
pub trait ValidatorExt<T>: Validator<T> + Sized {
    /// Transform a successful result.
    ///
    /// ```
    /// use envguard::validators::integer_env;
    /// use envguard::{Validator, ValidatorExt};
    ///
    /// let seconds = integer_env.map(|n| std::time::Duration::from_secs(n as u64));
    /// assert_eq!(seconds.validate("30").unwrap().as_secs(), 30);
    /// ```
    fn map<U, F>(self, f: F) -> impl Fn(&str) -> Result<U, ValidationError>
    where
        F: Fn(T) -> U,
    {
        move |raw| self.validate(raw).map(&f)
    }

    /// Run a further check on a successful result. `f` receives the raw string
    /// as well so its error can echo it.
    fn and_then<U, F>(self, f: F) -> impl Fn(&str) -> Result<U, ValidationError>
    where
        F: Fn(T, &str) -> Result<U, ValidationError>,
    {
        move |raw| self.validate(raw).and_then(|value| f(value, raw))
    }
}

impl<T, V: Validator<T>> ValidatorExt<T> for V {}

/// A validator whose result has been erased to [`Value`].
///
/// Batch operations hold validators with different result types in one list;
/// this is the common shape they share.
pub trait ValueValidator: Send + Sync {
    /// Validate `raw` and convert the result into a `Value`.
    fn validate_value(&self, raw: &str) -> Result<Value, ValidationError>;
}

/// Adapter that erases a typed validator's result into a [`Value`].
pub struct Erased<V, T> {
    validator: V,
    _result: PhantomData<fn() -> T>,
}

impl<V, T> Erased<V, T>
where
    V: Validator<T>,
    T: Into<Value>,
{
    /// Wrap a typed validator.
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            _result: PhantomData,
        }
    }
}

impl<V, T> ValueValidator for Erased<V, T>
where
    V: Validator<T> + Send + Sync,
    T: Into<Value>,
{
    fn validate_value(&self, raw: &str) -> Result<Value, ValidationError> {
        self.validator.validate(raw).map(Into::into)
    }
}
