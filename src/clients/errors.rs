//! Error types for monday.com API requests.
//!
//! Every failure of [`RequestExecutor::execute`](crate::clients::RequestExecutor::execute)
//! is a [`MondayError`]:
//!
//! - [`MondayError::Api`]: an HTTP response was obtained and classified into an
//!   [`ErrorKind`]. The [`ApiError`] keeps the full response.
//! - [`MondayError::Transport`]: no complete HTTP response was obtained (DNS,
//!   TLS, timeout, connection refused, body cut off). There is no response
//!   to inspect.
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_api::{ErrorKind, MondayError};
//!
//! match client.query("query { me { id } }").await {
//!     Ok(response) => println!("{}", response.body["data"]),
//!     Err(e) if e.kind() == ErrorKind::RateLimit => back_off(),
//!     Err(MondayError::Api(e)) => println!("{} ({:?})", e.message, e.code),
//!     Err(MondayError::Transport(e)) => println!("network: {e}"),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::clients::MondayResponse;

/// The category of a request failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or invalid token, or insufficient permissions.
    Authorization,
    /// Rate, daily, or concurrency limit exceeded.
    RateLimit,
    /// Query complexity budget exhausted.
    Complexity,
    /// The API failed with a 5xx status.
    InternalServer,
    /// The requested resource does not exist.
    ResourceNotFound,
    /// Malformed query or invalid arguments.
    InvalidRequest,
    /// Any failure not covered by a more specific kind.
    Generic,
    /// No HTTP response was obtained.
    Transport,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Authorization => "authorization error",
            Self::RateLimit => "rate limit error",
            Self::Complexity => "complexity error",
            Self::InternalServer => "internal server error",
            Self::ResourceNotFound => "resource not found",
            Self::InvalidRequest => "invalid request",
            Self::Generic => "API error",
            Self::Transport => "transport error",
        };
        f.write_str(name)
    }
}

/// An error classified from an HTTP response.
///
/// All kinds share the same fields; match on [`kind`](Self::kind) to tell
/// them apart.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}: {message}")]
pub struct ApiError {
    /// The failure category.
    pub kind: ErrorKind,
    /// The raw `error_code` for code-based errors, otherwise a description
    /// taken from the response.
    pub message: String,
    /// The normalized error code, when the body carried an `error_code`.
    pub code: Option<String>,
    /// The response that triggered the error.
    pub response: Box<MondayResponse>,
}

impl ApiError {
    /// Creates a new API error.
    #[must_use]
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        code: Option<String>,
        response: MondayResponse,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            code,
            response: Box::new(response),
        }
    }

    /// Returns the HTTP status of the response.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.response.status
    }
}

/// Unified error type for monday.com API requests.
#[derive(Debug, Error)]
pub enum MondayError {
    /// The API answered and the answer was classified as a failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// No HTTP response was obtained.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl MondayError {
    /// Returns the failure category. Transport failures report
    /// [`ErrorKind::Transport`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Api(e) => e.kind,
            Self::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Returns the response that triggered the error, if one was obtained.
    #[must_use]
    pub fn response(&self) -> Option<&MondayResponse> {
        match self {
            Self::Api(e) => Some(&e.response),
            Self::Transport(_) => None,
        }
    }

    /// Returns the normalized error code, if any.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api(e) => e.code.as_deref(),
            Self::Transport(_) => None,
        }
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api(e) => e.message.clone(),
            Self::Transport(e) => e.to_string(),
        }
    }

    /// Returns `true` if no HTTP response was obtained.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
