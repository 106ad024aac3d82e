//! Request execution and failure classification.
//!
//! [`RequestExecutor::execute`] posts a GraphQL document and either returns
//! the response or a classified [`MondayError`]:
//!
//! | Status | `error_code` in body | Result |
//! |--------|----------------------|--------|
//! | 2xx    | absent               | `Ok(response)` |
//! | any    | present              | kind from the error-code table |
//! | non-2xx | absent              | kind from the status table |
//!
//! GraphQL `errors` arrays in a 2xx response are returned to the caller
//! untouched. Nothing is retried.

use crate::clients::mapping::{error_code_error_kind, status_code_error_kind};
use crate::clients::{ApiError, HttpClient, MondayError, MondayResponse};
use crate::config::MondayConfig;

/// Executes GraphQL documents against the monday.com API.
///
/// The executor holds no per-request state, so one instance can serve any
/// number of concurrent calls.
#[derive(Debug)]
pub struct RequestExecutor {
    http_client: HttpClient,
}

// Verify RequestExecutor is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RequestExecutor>();
};

impl RequestExecutor {
    /// Creates an executor for the given configuration.
    #[must_use]
    pub fn new(config: &MondayConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Posts `document` and classifies the outcome.
    ///
    /// # Errors
    ///
    /// - [`MondayError::Transport`] if no HTTP response was obtained
    /// - [`MondayError::Api`] if the status is outside 2xx or the body
    ///   carries a top-level `error_code`
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = executor.execute("query { me { id name } }").await?;
    /// println!("{}", response.body["data"]["me"]["name"]);
    /// ```
    pub async fn execute(&self, document: &str) -> Result<MondayResponse, MondayError> {
        let raw = self.http_client.post(document).await?;
        classify(MondayResponse::from(raw))
    }
}

/// Returns the response if it is a success, or the error it maps to.
pub(crate) fn classify(response: MondayResponse) -> Result<MondayResponse, MondayError> {
    if let Some(error_code) = response.error_code() {
        return Err(error_code_exception(error_code, response).into());
    }

    if response.is_success() {
        return Ok(response);
    }

    Err(status_code_exception(response).into())
}

fn error_code_exception(error_code: String, response: MondayResponse) -> ApiError {
    let (kind, code) = error_code_error_kind(&error_code);
    ApiError::new(kind, error_code, Some(code), response)
}

fn status_code_exception(response: MondayResponse) -> ApiError {
    let kind = status_code_error_kind(response.status);
    ApiError::new(kind, response.failure_message(), None, response)
}
