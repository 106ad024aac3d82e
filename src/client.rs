//! The monday.com API client.

use std::sync::Arc;

use crate::clients::{MondayError, MondayResponse, RequestExecutor};
use crate::config::{self, MondayConfig};
use crate::error::ConfigError;
use crate::resources::{Board, Me, User, Webhook};

/// Entry point for the monday.com API.
///
/// A client owns its configuration and one [`RequestExecutor`]. Every
/// resource facade is built when the client is created and shares that
/// executor. Cloning a client is cheap and clones share the executor.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use monday_api::{ApiToken, Client, MondayConfig};
///
/// let config = MondayConfig::builder()
///     .token(ApiToken::new("my-token").unwrap())
///     .build()
///     .unwrap();
///
/// let client = Client::new(Some(&config))?;
///
/// let me = client.me().query(None).await?;
/// let raw = client.query("query { boards(limit: 5) { id name } }").await?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    config: MondayConfig,
    executor: Arc<RequestExecutor>,
    me: Me,
    user: User,
    webhook: Webhook,
    board: Board,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client from `config`, or from the process-wide default
    /// configuration when `config` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DefaultConfigNotSet`] if `config` is `None` and
    /// no default was installed with
    /// [`set_default_config`](crate::config::set_default_config).
    pub fn new(config: Option<&MondayConfig>) -> Result<Self, ConfigError> {
        let config = match config {
            Some(config) => config.clone(),
            None => {
                let config = config::default_config().ok_or(ConfigError::DefaultConfigNotSet)?;
                tracing::debug!("monday.com client using the process-wide default configuration");
                config.clone()
            }
        };

        let executor = Arc::new(RequestExecutor::new(&config));

        Ok(Self {
            me: Me::new(Arc::clone(&executor)),
            user: User::new(Arc::clone(&executor)),
            webhook: Webhook::new(Arc::clone(&executor)),
            board: Board::new(Arc::clone(&executor)),
            executor,
            config,
        })
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &MondayConfig {
        &self.config
    }

    /// Returns the shared request executor.
    #[must_use]
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Returns the `me` resource.
    #[must_use]
    pub const fn me(&self) -> &Me {
        &self.me
    }

    /// Returns the `users` resource.
    #[must_use]
    pub const fn user(&self) -> &User {
        &self.user
    }

    /// Returns the `webhooks` resource.
    #[must_use]
    pub const fn webhook(&self) -> &Webhook {
        &self.webhook
    }

    /// Returns the `boards` resource.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Executes a hand-written GraphQL query.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client.query("query { users(ids: [123456]) { id name email } }").await?;
    /// ```
    pub async fn query(&self, document: &str) -> Result<MondayResponse, MondayError> {
        self.executor.execute(document).await
    }

    /// Executes a hand-written GraphQL mutation.
    ///
    /// Identical to [`query`](Self::query); provided for readability.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    pub async fn mutate(&self, document: &str) -> Result<MondayResponse, MondayError> {
        self.executor.execute(document).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, HostUrl};

    fn create_test_config() -> MondayConfig {
        MondayConfig::builder()
            .token(ApiToken::new("test-token").unwrap())
            .host(HostUrl::new("http://localhost:9999/v2").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_with_explicit_config() {
        let config = create_test_config();
        let client = Client::new(Some(&config)).unwrap();

        assert_eq!(client.config().host().as_ref(), "http://localhost:9999/v2");
        assert_eq!(
            client.executor().http_client().uri(),
            "http://localhost:9999/v2"
        );
    }

    #[test]
    fn test_clones_share_executor() {
        let client = Client::new(Some(&create_test_config())).unwrap();
        let clone = client.clone();

        assert!(Arc::ptr_eq(&client.executor, &clone.executor));
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
