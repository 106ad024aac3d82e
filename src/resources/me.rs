//! The `me` resource.

use std::sync::Arc;

use crate::clients::{MondayError, MondayResponse, RequestExecutor};
use crate::resources::Select;

/// Scalar fields returned by [`Me::query`] when no selection is given.
pub const ME_DEFAULT_SELECT: &[&str] = &[
    "id",
    "name",
    "email",
    "url",
    "birthday",
    "country_code",
    "created_at",
    "current_language",
    "join_date",
    "enabled",
    "is_admin",
    "is_guest",
    "is_pending",
    "is_verified",
    "is_view_only",
    "last_activity",
    "location",
    "mobile_phone",
    "phone",
    "photo_original",
    "photo_small",
    "photo_thumb",
    "photo_thumb_small",
    "photo_tiny",
    "sign_up_product_kind",
    "time_zone_identifier",
    "title",
    "utc_hours_diff",
];

/// The user whose API token is in use.
#[derive(Clone, Debug)]
pub struct Me {
    executor: Arc<RequestExecutor>,
}

impl Me {
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Returns the selection used when none is given: every scalar profile
    /// field plus the account and teams.
    #[must_use]
    pub fn default_select() -> Select {
        Select::from(ME_DEFAULT_SELECT)
            .nested("account", Select::new(["id", "name"]))
            .nested("teams", Select::new(["id", "name"]))
    }

    /// Retrieves the authenticated user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use monday_api::resources::Select;
    ///
    /// let response = client.me().query(Some(Select::new(["id", "name"]))).await?;
    /// println!("{}", response.body["data"]["me"]["name"]);
    /// ```
    pub async fn query(&self, select: Option<Select>) -> Result<MondayResponse, MondayError> {
        let select = select.unwrap_or_else(Self::default_select);
        let document = format!("query {{ me {{ {select} }} }}");
        self.executor.execute(&document).await
    }
}
