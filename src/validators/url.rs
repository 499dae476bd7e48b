//! URL validator.

use url::Url;

use crate::error::ValidationError;

/// An absolute URL, parsed into [`url::Url`].
///
/// The result exposes `scheme()`, `host_str()`, `port()` / `port_or_known_default()`
/// and `path()`.
///
/// ```
/// use envguard::validators::url_env;
///
/// let api = url_env("https://api.example.com:8443/v1").unwrap();
/// assert_eq!(api.scheme(), "https");
/// assert_eq!(api.host_str(), Some("api.example.com"));
/// assert_eq!(api.port(), Some(8443));
/// assert_eq!(api.path(), "/v1");
/// ```
pub fn url_env(raw: &str) -> Result<Url, ValidationError> {
    Url::parse(raw).map_err(|_| ValidationError::new("a URL", raw))
}
