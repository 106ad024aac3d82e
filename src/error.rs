//! Configuration error types for the monday.com API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use monday_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or installing a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid monday.com API token.")]
    EmptyToken,

    /// API token contains characters that cannot appear in an HTTP header.
    #[error("API token contains control characters. Please check for stray newlines or tabs.")]
    InvalidToken,

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.monday.com/v2').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-10').")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The process-wide default configuration was already installed.
    #[error("The default configuration has already been set and cannot be replaced.")]
    DefaultConfigAlreadySet,

    /// No configuration was passed and no process-wide default exists.
    #[error("No configuration provided and no default configuration has been set.")]
    DefaultConfigNotSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_error_message() {
        let message = ConfigError::EmptyToken.to_string();
        assert!(message.contains("API token cannot be empty"));
    }

    #[test]
    fn test_invalid_api_version_error_message() {
        let error = ConfigError::InvalidApiVersion {
            version: "24-1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("24-1"));
        assert!(message.contains("YYYY-MM"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "token" };
        let message = error.to_string();
        assert!(message.contains("token"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::DefaultConfigNotSet;
        let _: &dyn std::error::Error = &error;
    }
}
