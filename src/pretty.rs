//! Pretty printing for startup failures.
//!
//! Renders [`EnvErrors`] as a grouped report: missing variables first, then
//! invalid ones with the rejected value and what was expected. Values held by
//! secret-looking variables are redacted.
//!
//! # Output Format
//!
//! ```text
//! Environment errors (3):
//!
//!   missing:
//!     • DATABASE_URL
//!
//!   invalid:
//!     • PORT = "http": expected a port (integer 0-65535)
//!     • API_TOKEN = [REDACTED]: expected a string of at least 32 characters
//!
//! Hints:
//!   • Set 'DATABASE_URL' in the environment
//! ```

use std::fmt::Write as _;
use std::io::{IsTerminal, Write as _};

use stillwater::Validation;

use crate::error::{EnvError, EnvErrors, EnvValidation, ValidationError};

/// Fragments of a variable name that mark its value as secret.
const SENSITIVE_FRAGMENTS: &[&str] = &["password", "secret", "key", "token", "credential", "dsn"];

/// Hints shown at the end of a report.
const MAX_HINTS: usize = 3;

/// Report settings.
#[derive(Debug, Clone)]
pub struct PrettyPrintOptions {
    /// When to emit ANSI colors.
    pub color: ColorOption,
    /// Append "Hints:" with suggested fixes.
    pub hints: bool,
    /// Stop after this many lines (None for no limit).
    pub limit: Option<usize>,
    /// Hide values of secret-looking variables.
    pub redact: bool,
}

impl Default for PrettyPrintOptions {
    fn default() -> Self {
        Self {
            color: ColorOption::Auto,
            hints: true,
            limit: Some(20),
            redact: true,
        }
    }
}

impl PrettyPrintOptions {
    /// Defaults without colors, for logs and tests.
    pub fn plain() -> Self {
        Self::default().with_color(ColorOption::Never)
    }

    pub fn with_color(self, color: ColorOption) -> Self {
        Self { color, ..self }
    }

    pub fn with_hints(self, hints: bool) -> Self {
        Self { hints, ..self }
    }

    pub fn with_limit(self, limit: Option<usize>) -> Self {
        Self { limit, ..self }
    }

    pub fn with_redaction(self, redact: bool) -> Self {
        Self { redact, ..self }
    }
}

/// When to color output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    /// Color when stderr is a terminal.
    Auto,
    Always,
    Never,
}

#[derive(Clone, Copy)]
enum Style {
    Heading,
    Group,
    Bullet,
    Name,
    Value,
    Hint,
    Notice,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Heading | Style::Bullet => "\x1b[1;31m",
            Style::Group => "\x1b[1;36m",
            Style::Name => "\x1b[1;37m",
            Style::Value => "\x1b[33m",
            Style::Hint => "\x1b[32m",
            Style::Notice => "\x1b[1;33m",
        }
    }
}

/// One variable and what went wrong with it.
enum Entry<'a> {
    Missing(&'a str),
    Invalid(&'a str, &'a ValidationError),
}

/// Split errors into missing and invalid entries, one per variable.
fn entries(errors: &EnvErrors) -> (Vec<Entry<'_>>, Vec<Entry<'_>>) {
    let mut missing = Vec::new();
    let mut invalid = Vec::new();
    for error in errors.iter() {
        match error {
            EnvError::Missing { name } => missing.push(Entry::Missing(name)),
            EnvError::MissingVars { names } => missing.extend(names.iter().map(|n| Entry::Missing(n))),
            EnvError::Invalid { name, source } => invalid.push(Entry::Invalid(name, source)),
            EnvError::InvalidVars { invalid: pairs } => {
                invalid.extend(pairs.iter().map(|(n, e)| Entry::Invalid(n, e)))
            }
        }
    }
    (missing, invalid)
}

/// True when a variable name looks like it holds a secret.
fn is_sensitive(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    SENSITIVE_FRAGMENTS.iter().any(|fragment| lower.contains(fragment))
}

struct Report<'o> {
    options: &'o PrettyPrintOptions,
    colored: bool,
    out: String,
}

impl<'o> Report<'o> {
    fn new(options: &'o PrettyPrintOptions, colored: bool) -> Self {
        Self {
            options,
            colored,
            out: String::new(),
        }
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.colored {
            format!("{}{}\x1b[0m", style.ansi(), text)
        } else {
            text.to_string()
        }
    }

    fn render(mut self, errors: &EnvErrors) -> String {
        let (missing, invalid) = entries(errors);
        let total = missing.len() + invalid.len();

        let heading = self.paint(Style::Heading, &format!("Environment errors ({total}):"));
        let _ = writeln!(self.out, "\n{heading}\n");

        let mut budget = self.options.limit.unwrap_or(usize::MAX);
        for (title, group) in [("missing", &missing), ("invalid", &invalid)] {
            if group.is_empty() {
                continue;
            }
            let title = self.paint(Style::Group, &format!("{title}:"));
            let _ = writeln!(self.out, "  {title}");
            for entry in group.iter() {
                if budget == 0 {
                    let shown = self.options.limit.unwrap_or(total);
                    let notice =
                        self.paint(Style::Notice, &format!("...and {} more errors", total - shown));
                    let _ = writeln!(self.out, "\n  {notice}\n");
                    return self.out;
                }
                self.entry(entry);
                budget -= 1;
            }
            self.out.push('\n');
        }

        if self.options.hints {
            self.hints(errors);
        }
        self.out
    }

    fn entry(&mut self, entry: &Entry<'_>) {
        let bullet = self.paint(Style::Bullet, "•");
        match *entry {
            Entry::Missing(name) => {
                let name = self.paint(Style::Name, name);
                let _ = writeln!(self.out, "    {bullet} {name}");
            }
            Entry::Invalid(name, error) => {
                let shown = if self.options.redact && is_sensitive(name) {
                    "[REDACTED]".to_string()
                } else {
                    format!("\"{}\"", error.value)
                };
                let name = self.paint(Style::Name, name);
                let shown = self.paint(Style::Value, &shown);
                let _ = writeln!(
                    self.out,
                    "    {bullet} {name} = {shown}: expected {}",
                    error.expected
                );
            }
        }
    }

    fn hints(&mut self, errors: &EnvErrors) {
        let hints: Vec<String> = errors
            .iter()
            .filter_map(EnvError::suggestion)
            .take(MAX_HINTS)
            .collect();
        if hints.is_empty() {
            return;
        }
        let title = self.paint(Style::Hint, "Hints:");
        let _ = writeln!(self.out, "{title}");
        for hint in hints {
            let _ = writeln!(self.out, "  • {hint}");
        }
        self.out.push('\n');
    }
}

impl EnvErrors {
    /// Render the report as a string. `Auto` color renders without color.
    pub fn format(&self, options: &PrettyPrintOptions) -> String {
        Report::new(options, options.color == ColorOption::Always).render(self)
    }

    /// Write the report to stderr.
    pub fn pretty_print(&self, options: &PrettyPrintOptions) {
        let colored = match options.color {
            ColorOption::Always => true,
            ColorOption::Never => false,
            ColorOption::Auto => std::io::stderr().is_terminal(),
        };
        let report = Report::new(options, colored).render(self);
        let _ = std::io::stderr().write_all(report.as_bytes());
    }
}

/// Startup-friendly unwrapping for resolution results.
///
/// Implemented for accumulated validations and for single-error results, so
/// both `resolver.check_all(..)` and `resolver.require_all(..)` can end a
/// startup path with `.unwrap_or_exit()`.
pub trait ValidationExt<T>: Sized {
    /// Convert into a plain result over [`EnvErrors`].
    fn into_env_result(self) -> Result<T, EnvErrors>;

    /// Unwrap, or print the report to stderr and exit with code 1.
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_exit_with(&PrettyPrintOptions::default())
    }

    /// Like [`ValidationExt::unwrap_or_exit`] with custom report options.
    fn unwrap_or_exit_with(self, options: &PrettyPrintOptions) -> T {
        match self.into_env_result() {
            Ok(value) => value,
            Err(errors) => {
                errors.pretty_print(options);
                std::process::exit(1);
            }
        }
    }

    /// Print the report on failure but hand the errors back instead of exiting.
    fn unwrap_or_print(self) -> Result<T, EnvErrors> {
        self.into_env_result()
            .inspect_err(|errors| errors.pretty_print(&PrettyPrintOptions::default()))
    }
}

impl<T> ValidationExt<T> for EnvValidation<T> {
    fn into_env_result(self) -> Result<T, EnvErrors> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => Err(errors),
        }
    }
}

impl<T> ValidationExt<T> for Result<T, EnvError> {
    fn into_env_result(self) -> Result<T, EnvErrors> {
        self.map_err(EnvErrors::single)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvErrors {
        EnvErrors::from_vec(vec![
            EnvError::MissingVars {
                names: vec!["DATABASE_URL".to_string(), "REDIS_URL".to_string()],
            },
            EnvError::invalid("PORT", ValidationError::new("a port (integer 0-65535)", "http")),
            EnvError::invalid(
                "API_TOKEN",
                ValidationError::new("a string of at least 32 characters", "hunter2"),
            ),
        ])
        .unwrap()
    }

    #[test]
    fn test_groups_missing_before_invalid() {
        let output = sample().format(&PrettyPrintOptions::plain());

        assert!(output.contains("Environment errors (4):"));
        assert!(output.contains("• DATABASE_URL"));
        assert!(output.contains("• REDIS_URL"));
        assert!(output.contains("PORT = \"http\": expected a port (integer 0-65535)"));
        assert!(output.find("missing:").unwrap() < output.find("invalid:").unwrap());
    }

    #[test]
    fn test_redaction() {
        let redacted = sample().format(&PrettyPrintOptions::plain());
        assert!(redacted.contains("API_TOKEN = [REDACTED]"));
        assert!(!redacted.contains("hunter2"));

        let plain = sample().format(&PrettyPrintOptions::plain().with_redaction(false));
        assert!(plain.contains("API_TOKEN = \"hunter2\""));
    }

    #[test]
    fn test_limit() {
        let output = sample().format(&PrettyPrintOptions::plain().with_limit(Some(2)));
        assert!(output.contains("...and 2 more errors"));
        assert!(!output.contains("PORT"));

        let all = sample().format(&PrettyPrintOptions::plain().with_limit(None));
        assert!(all.contains("API_TOKEN"));
    }

    #[test]
    fn test_hints() {
        let output = sample().format(&PrettyPrintOptions::plain());
        assert!(output.contains("Hints:"));
        assert!(output.contains("Set 'DATABASE_URL', 'REDIS_URL' in the environment"));

        let quiet = sample().format(&PrettyPrintOptions::plain().with_hints(false));
        assert!(!quiet.contains("Hints:"));
    }

    #[test]
    fn test_color() {
        let colored = sample().format(&PrettyPrintOptions::default().with_color(ColorOption::Always));
        assert!(colored.contains("\x1b[1;31m"));
        assert!(!sample().format(&PrettyPrintOptions::default()).contains("\x1b["));
    }

    #[test]
    fn test_is_sensitive() {
        assert!(is_sensitive("DB_PASSWORD"));
        assert!(is_sensitive("STRIPE_SECRET_KEY"));
        assert!(is_sensitive("SENTRY_DSN"));
        assert!(!is_sensitive("PORT"));
    }

    #[test]
    fn test_unwrap_or_print() {
        let ok: EnvValidation<u16> = Validation::Success(8080);
        assert_eq!(ok.unwrap_or_print().unwrap(), 8080);

        let ok: Result<u16, EnvError> = Ok(80);
        assert_eq!(ok.unwrap_or_print().unwrap(), 80);

        let err: Result<u16, EnvError> = Err(EnvError::missing("PORT"));
        assert_eq!(err.unwrap_or_print().unwrap_err().len(), 1);
    }
}
