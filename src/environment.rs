//! Deployment environment helpers.
//!
//! The environment name comes from one variable, `APP_ENV` unless the resolver
//! is configured otherwise with [`Resolver::with_environment_var`]. An unset
//! variable falls back to the caller's default, which is `"development"` for
//! the `is_*` checks.

use crate::resolve::Resolver;

/// Name reported when the environment variable is unset.
pub const DEFAULT_ENVIRONMENT: &str = "development";

impl Resolver<'_> {
    /// The current environment name, or `fallback` when unset.
    ///
    /// ```
    /// use envguard::prelude::*;
    ///
    /// let env = MockEnv::new().with_env("APP_ENV", "staging");
    /// assert_eq!(Resolver::new(&env).environment_name("development"), "staging");
    ///
    /// let empty = MockEnv::new();
    /// assert_eq!(Resolver::new(&empty).environment_name("local"), "local");
    /// ```
    pub fn environment_name(&self, fallback: &str) -> String {
        self.lookup(self.environment_var())
            .unwrap_or_else(|| fallback.to_string())
    }

    /// True when the environment name is exactly `production`.
    pub fn is_production(&self) -> bool {
        self.environment_name(DEFAULT_ENVIRONMENT) == "production"
    }

    /// True when the environment name is `development` or unset.
    pub fn is_development(&self) -> bool {
        self.environment_name(DEFAULT_ENVIRONMENT) == "development"
    }

    /// True when the environment name is exactly `test`.
    pub fn is_test(&self) -> bool {
        self.environment_name(DEFAULT_ENVIRONMENT) == "test"
    }
}

/// [`Resolver::environment_name`] against the process environment.
pub fn environment_name(fallback: &str) -> String {
    Resolver::system().environment_name(fallback)
}

/// [`Resolver::is_production`] against the process environment.
pub fn is_production() -> bool {
    Resolver::system().is_production()
}

/// [`Resolver::is_development`] against the process environment.
pub fn is_development() -> bool {
    Resolver::system().is_development()
}

/// [`Resolver::is_test`] against the process environment.
pub fn is_test() -> bool {
    Resolver::system().is_test()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MockEnv;

    #[test]
    fn test_unset_is_development() {
        let env = MockEnv::new();
        let resolver = Resolver::new(&env);

        assert_eq!(resolver.environment_name(DEFAULT_ENVIRONMENT), "development");
        assert!(resolver.is_development());
        assert!(!resolver.is_production());
        assert!(!resolver.is_test());
    }

    #[test]
    fn test_exact_names() {
        let env = MockEnv::new().with_env("APP_ENV", "production");
        let resolver = Resolver::new(&env);
        assert!(resolver.is_production());
        assert!(!resolver.is_development());

        env.set_env("APP_ENV", "test");
        assert!(resolver.is_test());

        env.set_env("APP_ENV", "Production");
        assert!(!resolver.is_production());
    }

    #[test]
    fn test_custom_environment_var() {
        let env = MockEnv::new()
            .with_env("APP_ENV", "production")
            .with_env("DEPLOY_ENV", "test");
        let resolver = Resolver::new(&env).with_environment_var("DEPLOY_ENV");

        assert_eq!(resolver.environment_var(), "DEPLOY_ENV");
        assert!(resolver.is_test());
        assert!(!resolver.is_production());
    }

    #[test]
    fn test_empty_value_is_not_fallback() {
        let env = MockEnv::new().with_env("APP_ENV", "");
        let resolver = Resolver::new(&env);

        assert_eq!(resolver.environment_name("development"), "");
        assert!(!resolver.is_development());
    }
}
