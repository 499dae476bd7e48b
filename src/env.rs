//! Where raw values come from.
//!
//! Resolution reads through an [`EnvAccessor`] instead of calling `std::env`
//! itself. Production code uses [`RealEnv`]; tests build a [`MockEnv`] and never
//! touch process state.

use std::collections::{BTreeMap, HashMap};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Read-only view of a flat name to string mapping.
///
/// `None` means absent. `Some("")` is a present, empty value and is handed to
/// validators like any other.
///
/// ```
/// use envguard::env::{EnvAccessor, MockEnv};
///
/// let env = MockEnv::new().with_env("PORT", "8080").with_env("EMPTY", "");
///
/// assert_eq!(env.get_env("PORT").as_deref(), Some("8080"));
/// assert_eq!(env.get_env("EMPTY").as_deref(), Some(""));
/// assert_eq!(env.get_env("MISSING"), None);
/// ```
pub trait EnvAccessor: Send + Sync {
    /// The raw value of `name`, if set.
    fn get_env(&self, name: &str) -> Option<String>;

    /// Every `(name, value)` pair, in no particular order.
    fn all_env_vars(&self) -> Vec<(String, String)>;

    /// Pairs whose name starts with `prefix`.
    fn env_vars_with_prefix(&self, prefix: &str) -> Vec<(String, String)> {
        let mut vars = self.all_env_vars();
        vars.retain(|(name, _)| name.starts_with(prefix));
        vars
    }
}

/// The process environment.
///
/// A variable whose value is not valid unicode reads as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealEnv;

impl RealEnv {
    /// Create a handle to the process environment.
    pub fn new() -> Self {
        RealEnv
    }
}

impl EnvAccessor for RealEnv {
    fn get_env(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn all_env_vars(&self) -> Vec<(String, String)> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// An in-memory environment.
///
/// Values can be changed after the resolver borrowing it was created, which is
/// how tests simulate an operator fixing a variable between two checks. Also
/// useful for values pre-loaded from somewhere else, such as a `.env` file.
///
/// ```
/// use envguard::env::{EnvAccessor, MockEnv};
///
/// let env = MockEnv::new().with_env("PORT", "5432");
/// env.set_env("PORT", "6543");
/// assert_eq!(env.get_env("PORT").as_deref(), Some("6543"));
/// ```
#[derive(Debug, Default)]
pub struct MockEnv {
    vars: RwLock<BTreeMap<String, String>>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`MockEnv::set_env`].
    pub fn with_env(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_env(name, value);
        self
    }

    /// Builder form accepting any iterator of pairs.
    pub fn with_envs<I, K, V>(self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.write()
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Set or replace a variable.
    pub fn set_env(&self, name: impl Into<String>, value: impl Into<String>) {
        self.write().insert(name.into(), value.into());
    }

    /// Unset a variable.
    pub fn remove_env(&self, name: &str) {
        self.write().remove(name);
    }

    // Poisoning only happens if a test panicked while holding the lock.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, String>> {
        self.vars.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, String>> {
        self.vars.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MockEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MockEnv::new().with_envs(iter)
    }
}

impl EnvAccessor for MockEnv {
    fn get_env(&self, name: &str) -> Option<String> {
        self.read().get(name).cloned()
    }

    fn all_env_vars(&self) -> Vec<(String, String)> {
        self.read().clone().into_iter().collect()
    }

    fn env_vars_with_prefix(&self, prefix: &str) -> Vec<(String, String)> {
        self.read()
            .range(prefix.to_string()..)
            .take_while(|(name, _)| name.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

macro_rules! map_accessor {
    ($($map:ident),*) => {
        $(
            impl EnvAccessor for $map<String, String> {
                fn get_env(&self, name: &str) -> Option<String> {
                    self.get(name).cloned()
                }

                fn all_env_vars(&self) -> Vec<(String, String)> {
                    self.clone().into_iter().collect()
                }
            }
        )*
    };
}

map_accessor!(HashMap, BTreeMap);
