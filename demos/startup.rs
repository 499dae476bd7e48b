//! Startup validation example.
//!
//! Checks every variable a small service needs before it starts, prints a
//! readable report listing all problems at once, and exits non-zero on failure.
//!
//! Run with:
//!   DATABASE_URL=postgres://localhost/app PORT=8080 \
//!   SMTP_HOST=smtp.example.com SMTP_FROM=ops@example.com cargo run --example startup
//!
//! Set `RUST_LOG=envguard=debug` to see resolution events.

use envguard::prelude::*;

#[allow(dead_code)]
#[derive(Debug)]
struct Settings {
    database_url: String,
    port: u16,
    workers: i64,
    debug: bool,
    allowed_origins: Vec<String>,
    sentry_dsn: Option<String>,
}

fn load(resolver: &Resolver<'_>) -> Result<Settings, EnvError> {
    Ok(Settings {
        database_url: resolver.get("DATABASE_URL", postgres_uri_env)?,
        port: resolver.get("PORT", port_env)?,
        workers: resolver.get_or("WORKERS", range_env(1.0, 64.0).map(|n| n as i64), 4)?,
        debug: resolver.get_or("DEBUG", bool_env, false)?,
        allowed_origins: resolver.get_or("ALLOWED_ORIGINS", array_env(","), Vec::new())?,
        sentry_dsn: resolver.resolve(EnvVar::new("SENTRY_DSN", string_env).optional())?,
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let resolver = Resolver::system();

    // Typed checks for the server; mail settings are required as a group.
    resolver
        .check_all(vec![
            VarSpec::typed("DATABASE_URL", postgres_uri_env),
            VarSpec::typed("PORT", port_env),
            VarSpec::typed("WORKERS", range_env(1.0, 64.0)),
            VarSpec::typed("DEBUG", bool_env),
        ])
        .unwrap_or_exit();
    resolver
        .require_all(&[VarSpec::typed("SMTP_HOST", hostname_env), VarSpec::new("SMTP_FROM")])
        .unwrap_or_exit();

    let settings = load(&resolver).unwrap_or_exit();

    println!(
        "Starting in {} mode on port {} with {} workers",
        resolver.environment_name(envguard::DEFAULT_ENVIRONMENT),
        settings.port,
        settings.workers
    );
    if resolver.is_production() && settings.debug {
        eprintln!("warning: DEBUG is enabled in production");
    }
    println!("{:#?}", settings);
}
