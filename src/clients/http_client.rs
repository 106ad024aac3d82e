//! HTTP transport for monday.com API communication.
//!
//! [`HttpClient`] sends one POST per call and hands back the raw status,
//! headers, and body text. It does not interpret the response.

use std::collections::HashMap;

use crate::config::MondayConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw output of a single HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The response body as text.
    pub body_text: String,
}

/// HTTP client for posting GraphQL documents to the monday.com API.
///
/// The endpoint and headers are fixed at construction:
/// - `Content-Type: application/json`
/// - `Authorization: <token>` (verbatim, no `Bearer` prefix)
/// - `User-Agent`
/// - `API-Version`, when configured
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    uri: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use monday_api::{ApiToken, MondayConfig};
    /// use monday_api::clients::HttpClient;
    ///
    /// let config = MondayConfig::builder()
    ///     .token(ApiToken::new("my-token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// assert_eq!(client.uri(), "https://api.monday.com/v2");
    /// ```
    #[must_use]
    pub fn new(config: &MondayConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}monday API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.token().as_ref().to_string(),
        );
        default_headers.insert("User-Agent".to_string(), user_agent);

        if let Some(version) = config.api_version() {
            default_headers.insert("API-Version".to_string(), version.to_string());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            uri: config.host().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the endpoint every request is posted to.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Posts `body` to the endpoint.
    ///
    /// Any HTTP status, including 4xx and 5xx, is a successful exchange at
    /// this level.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] when no HTTP response could be obtained
    /// (DNS, TLS, timeout, connection refused) or when its body could not be
    /// read in full (connection reset, truncated body, timeout mid-body).
    pub async fn post(&self, body: &str) -> Result<RawResponse, reqwest::Error> {
        let mut req_builder = self.client.post(&self.uri);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!(uri = %self.uri, body_len = body.len(), "Sending monday.com API request");

        let res = req_builder.body(body.to_string()).send().await?;

        let status = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        tracing::debug!(status, "Received monday.com API response");

        if let Some(retry_after) = headers.get("retry-after").and_then(|v| v.first()) {
            tracing::warn!(
                status,
                retry_after = %retry_after,
                "monday.com API asked the client to slow down"
            );
        }

        Ok(RawResponse {
            status,
            headers,
            body_text,
        })
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
