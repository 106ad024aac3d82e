//! HTTP response type for monday.com API calls.
//!
//! A [`MondayResponse`] is built once from the transport output and never
//! changes afterwards. Building it never fails: a body that is empty, not
//! JSON, or not a JSON object is exposed as an empty object.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::clients::http_client::RawResponse;

/// A response from the monday.com API.
///
/// # Example
///
/// ```rust
/// use monday_api::MondayResponse;
/// use std::collections::HashMap;
///
/// let response = MondayResponse::new(200, HashMap::new(), r#"{"data":{"me":{"id":"1"}}}"#);
/// assert!(response.is_success());
/// assert_eq!(response.body["data"]["me"]["id"], "1");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MondayResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body. Always a JSON object.
    pub body: Value,
    raw_body: String,
}

impl MondayResponse {
    /// Creates a response from a status code, headers, and the raw body text.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        body_text: impl Into<String>,
    ) -> Self {
        let raw_body = body_text.into();
        let body = match serde_json::from_str::<Value>(&raw_body) {
            Ok(value @ Value::Object(_)) => value,
            _ => Value::Object(Map::new()),
        };

        Self {
            status,
            headers,
            body,
            raw_body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    ///
    /// Only the status is considered; see [`error_code`](Self::error_code)
    /// and [`errors`](Self::errors) for payload-level failures.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the top-level `error_code`, if present.
    ///
    /// Non-string codes are rendered as their JSON text.
    #[must_use]
    pub fn error_code(&self) -> Option<String> {
        match self.body.get("error_code")? {
            Value::Null => None,
            Value::String(code) => Some(code.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Returns the top-level `error_message`, if present.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.body.get("error_message").and_then(Value::as_str)
    }

    /// Returns the GraphQL `errors` array, if present.
    #[must_use]
    pub fn errors(&self) -> Option<&Vec<Value>> {
        self.body.get("errors").and_then(Value::as_array)
    }

    /// Returns `true` if the body carries `errors`, `error_code`, or
    /// `error_message`.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        ["errors", "error_code", "error_message"]
            .iter()
            .any(|key| self.body.get(key).is_some_and(|v| !v.is_null()))
    }

    /// Returns the GraphQL `data` object, if present.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.body.get("data").filter(|v| !v.is_null())
    }

    /// Returns the body exactly as received.
    #[must_use]
    pub fn raw_body(&self) -> &str {
        &self.raw_body
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `Retry-After` header value in seconds, if present and a
    /// finite, non-negative number.
    #[must_use]
    pub fn retry_after(&self) -> Option<f64> {
        self.header("retry-after")
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Builds a human-readable description of the failure carried by this
    /// response, for use as an error message.
    pub(crate) fn failure_message(&self) -> String {
        if let Some(message) = self.error_message() {
            return message.to_string();
        }

        let graphql_message = self
            .errors()
            .and_then(|errors| errors.first())
            .and_then(|error| error.get("message"))
            .and_then(Value::as_str);
        if let Some(message) = graphql_message {
            return message.to_string();
        }

        match reqwest::StatusCode::from_u16(self.status)
            .ok()
            .and_then(|status| status.canonical_reason())
        {
            Some(reason) => format!("HTTP {} {reason}", self.status),
            None => format!("HTTP {}", self.status),
        }
    }
}

impl From<RawResponse> for MondayResponse {
    fn from(raw: RawResponse) -> Self {
        Self::new(raw.status, raw.headers, raw.body_text)
    }
}
