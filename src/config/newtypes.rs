//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper validates its contents on construction, so a built
//! [`MondayConfig`](crate::MondayConfig) never holds an empty token or a
//! malformed host.

use crate::error::ConfigError;
use std::fmt;

/// A validated monday.com API token.
///
/// The token is sent verbatim in the `Authorization` header. Its `Debug`
/// output is masked to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use monday_api::ApiToken;
///
/// let token = ApiToken::new("eyJhbGciOi...").unwrap();
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyToken`] if the token is empty
    /// - [`ConfigError::InvalidToken`] if the token contains control
    ///   characters, which are not valid in the `Authorization` header
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        if token.chars().any(char::is_control) {
            return Err(ConfigError::InvalidToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated API endpoint URL.
///
/// Only the shape is checked: an alphabetic scheme followed by `://` and a
/// non-empty host. Any path, such as `/v2`, is kept as given.
///
/// # Example
///
/// ```rust
/// use monday_api::HostUrl;
///
/// let url = HostUrl::new("https://api.monday.com/v2").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.monday.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// The production monday.com GraphQL endpoint.
    pub const DEFAULT: &'static str = "https://api.monday.com/v2";

    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        if split_url(&url).is_none() {
            return Err(ConfigError::InvalidHostUrl { url });
        }
        Ok(Self(url))
    }

    /// Returns the URL scheme, e.g. `https`.
    #[must_use]
    pub fn scheme(&self) -> &str {
        split_url(&self.0).map_or("", |(scheme, _)| scheme)
    }

    /// Returns the host without port or path, e.g. `api.monday.com`.
    #[must_use]
    pub fn host_name(&self) -> &str {
        split_url(&self.0).map_or("", |(_, host)| host)
    }
}

/// Splits `url` into its scheme and host, or returns `None` if either is
/// missing.
fn split_url(url: &str) -> Option<(&str, &str)> {
    let (scheme, rest) = url.split_once("://")?;
    if scheme.is_empty() || !scheme.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    let host = rest
        .split(|c| matches!(c, ':' | '/' | '?' | '#'))
        .next()
        .unwrap_or_default();
    if host.is_empty() {
        return None;
    }

    Some((scheme, host))
}

impl Default for HostUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
