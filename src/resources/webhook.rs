//! The `webhooks` resource.

use std::sync::Arc;

use serde_json::Value;

use crate::clients::{MondayError, MondayResponse, RequestExecutor};
use crate::resources::{Args, Select};
use crate::webhooks::WebhookEvent;

/// Fields returned by [`Webhook::query`] and [`Webhook::create`] when no
/// selection is given.
pub const WEBHOOK_DEFAULT_SELECT: &[&str] = &["id", "board_id", "event", "config"];

/// Fields returned by [`Webhook::delete`] when no selection is given.
pub const WEBHOOK_DELETE_SELECT: &[&str] = &["id", "board_id"];

/// Webhook subscriptions on boards.
#[derive(Clone, Debug)]
pub struct Webhook {
    executor: Arc<RequestExecutor>,
}

impl Webhook {
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Retrieves the webhooks of a board.
    ///
    /// When `app_webhooks_only` is set, only webhooks created by the calling
    /// app are returned.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    pub async fn query(
        &self,
        board_id: i64,
        app_webhooks_only: bool,
        select: Option<Select>,
    ) -> Result<MondayResponse, MondayError> {
        let args = Args::new()
            .arg("board_id", board_id)
            .arg_opt("app_webhooks_only", app_webhooks_only.then_some(true));
        let select = select.unwrap_or_else(|| Select::from(WEBHOOK_DEFAULT_SELECT));

        let document = format!("query {{ webhooks{args} {{ {select} }} }}");
        self.executor.execute(&document).await
    }

    /// Subscribes `url` to `event` on a board.
    ///
    /// `config` carries event-specific settings such as
    /// `{"columnId": "status"}`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use monday_api::webhooks::WebhookEvent;
    ///
    /// let response = client
    ///     .webhook()
    ///     .create(1234567890, "https://example.com/hook", WebhookEvent::CreateItem, None, None)
    ///     .await?;
    /// ```
    pub async fn create(
        &self,
        board_id: i64,
        url: &str,
        event: WebhookEvent,
        config: Option<Value>,
        select: Option<Select>,
    ) -> Result<MondayResponse, MondayError> {
        let args = Args::new()
            .arg("board_id", board_id)
            .arg("url", url)
            .arg("event", event)
            .arg_opt("config", config);
        let select = select.unwrap_or_else(|| Select::from(WEBHOOK_DEFAULT_SELECT));

        let document = format!("mutation {{ create_webhook{args} {{ {select} }} }}");
        self.executor.execute(&document).await
    }

    /// Deletes a webhook subscription.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    pub async fn delete(
        &self,
        id: i64,
        select: Option<Select>,
    ) -> Result<MondayResponse, MondayError> {
        let args = Args::new().arg("id", id);
        let select = select.unwrap_or_else(|| Select::from(WEBHOOK_DELETE_SELECT));

        let document = format!("mutation {{ delete_webhook{args} {{ {select} }} }}");
        self.executor.execute(&document).await
    }
}
