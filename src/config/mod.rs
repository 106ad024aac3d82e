//! Configuration types for the monday.com API client.
//!
//! # Overview
//!
//! - [`MondayConfig`]: immutable settings shared by a client and its executor
//! - [`MondayConfigBuilder`]: builder for [`MondayConfig`]
//! - [`ApiToken`]: validated API token with masked debug output
//! - [`HostUrl`]: validated GraphQL endpoint URL
//! - [`ApiVersion`]: value for the `API-Version` header
//!
//! A process-wide default can be installed once with [`set_default_config`];
//! clients built without an explicit configuration use it.
//!
//! # Example
//!
//! ```rust
//! use monday_api::{ApiToken, ApiVersion, MondayConfig};
//! use std::time::Duration;
//!
//! let config = MondayConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::V2024_10)
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.host().as_ref(), "https://api.monday.com/v2");
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiToken, HostUrl};
pub use version::ApiVersion;

use crate::error::ConfigError;
use std::sync::OnceLock;
use std::time::Duration;

static DEFAULT_CONFIG: OnceLock<MondayConfig> = OnceLock::new();

/// Configuration for the monday.com API client.
///
/// `MondayConfig` is `Clone`, `Send`, and `Sync`. A client keeps its own copy,
/// so changes to a config value after a client is built never affect it.
#[derive(Clone, Debug)]
pub struct MondayConfig {
    token: ApiToken,
    host: HostUrl,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl MondayConfig {
    /// Creates a new builder for constructing a `MondayConfig`.
    #[must_use]
    pub fn builder() -> MondayConfigBuilder {
        MondayConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns the API version, if one was configured.
    #[must_use]
    pub const fn api_version(&self) -> Option<&ApiVersion> {
        self.api_version.as_ref()
    }

    /// Returns the request timeout, if one was configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify MondayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MondayConfig>();
};

/// Installs the process-wide default configuration.
///
/// The default can be set exactly once, typically at application startup.
/// Clients created with `Client::new(None)` use it.
///
/// # Errors
///
/// Returns [`ConfigError::DefaultConfigAlreadySet`] if a default was
/// already installed.
///
/// # Example
///
/// ```rust
/// use monday_api::{config, ApiToken, MondayConfig};
///
/// let config = MondayConfig::builder()
///     .token(ApiToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// config::set_default_config(config).unwrap();
/// assert!(config::default_config().is_some());
/// ```
pub fn set_default_config(config: MondayConfig) -> Result<(), ConfigError> {
    DEFAULT_CONFIG
        .set(config)
        .map_err(|_| ConfigError::DefaultConfigAlreadySet)
}

/// Returns the process-wide default configuration, if one was installed.
#[must_use]
pub fn default_config() -> Option<&'static MondayConfig> {
    DEFAULT_CONFIG.get()
}

/// Builder for constructing [`MondayConfig`] instances.
///
/// Only `token` is required.
///
/// # Defaults
///
/// - `host`: `https://api.monday.com/v2`
/// - `api_version`: `None` (no `API-Version` header)
/// - `timeout`: `None` (no client-side timeout)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct MondayConfigBuilder {
    token: Option<ApiToken>,
    host: Option<HostUrl>,
    api_version: Option<ApiVersion>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl MondayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the GraphQL endpoint URL.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the API version sent in the `API-Version` header.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`MondayConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<MondayConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(MondayConfig {
            token,
            host: self.host.unwrap_or_default(),
            api_version: self.api_version,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
