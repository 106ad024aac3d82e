//! Webhook-specific error types.

use thiserror::Error;

/// Error type for incoming webhook handling.
///
/// # Example
///
/// ```rust
/// use monday_api::webhooks::WebhookError;
///
/// let error = WebhookError::MissingChallenge;
/// assert!(error.to_string().contains("challenge"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WebhookError {
    /// The request body is not valid JSON.
    #[error("Webhook payload is not valid JSON: {reason}")]
    InvalidPayload {
        /// The parser's description of the problem.
        reason: String,
    },

    /// The body has no string `challenge` field.
    #[error("Webhook payload does not contain a challenge")]
    MissingChallenge,

    /// The `Authorization` header is missing or empty.
    #[error("Webhook request has no authorization token")]
    MissingAuthorization,

    /// The authorization token failed verification.
    #[error("Webhook authorization is invalid: {reason}")]
    InvalidAuthorization {
        /// Why the token was rejected.
        reason: String,
    },
}
