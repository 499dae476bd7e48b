//! Testing with MockEnv.
//!
//! Shows how to resolve configuration against an injected environment, the
//! same way unit tests do, without touching the process environment.
//!
//! Run with: cargo run --example mock-env

use envguard::prelude::*;

fn main() {
    let env = MockEnv::new()
        .with_env("APP_ENV", "staging")
        .with_env("PORT", "80a")
        .with_env("API_TOKEN", "short")
        .with_env("FEATURES", "search, billing");
    let resolver = Resolver::new(&env);

    println!("environment: {}", resolver.environment_name("development"));

    let features = resolver.get("FEATURES", array_env(","));
    println!("features: {:?}", features);

    match resolver.require_all(&[
        VarSpec::typed("PORT", port_env),
        VarSpec::typed("API_TOKEN", min_length(32)),
    ]) {
        Ok(()) => println!("all required variables valid"),
        Err(error) => {
            println!("require_all: {}", error);
            EnvErrors::single(error).pretty_print(&PrettyPrintOptions::default());
        }
    }

    env.set_env("PORT", "8080");
    let port = resolver.get("PORT", port_env);
    println!("after fix: {:?}", port);
}
