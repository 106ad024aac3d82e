//! The `users` resource.

use std::sync::Arc;

use crate::clients::{MondayError, MondayResponse, RequestExecutor};
use crate::resources::{ArgValue, Args, Select};

/// Fields returned by [`User::query`] when no selection is given.
pub const USER_DEFAULT_SELECT: &[&str] = &["id", "name", "email", "photo_thumb", "title"];

/// Filter for the `kind` argument of a users query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserKind {
    /// Every user.
    All,
    /// Guests only.
    Guests,
    /// Members and admins only.
    NonGuests,
    /// Users who accepted their invitation.
    NonPending,
}

impl From<UserKind> for ArgValue {
    fn from(kind: UserKind) -> Self {
        let value = match kind {
            UserKind::All => "all",
            UserKind::Guests => "guests",
            UserKind::NonGuests => "non_guests",
            UserKind::NonPending => "non_pending",
        };
        Self::enum_value(value)
    }
}

/// Users of the account.
#[derive(Clone, Debug)]
pub struct User {
    executor: Arc<RequestExecutor>,
}

impl User {
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Retrieves users.
    ///
    /// Supported arguments include `ids`, `emails`, `kind` ([`UserKind`]),
    /// `limit`, and `page`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use monday_api::resources::{Args, UserKind};
    ///
    /// let args = Args::new().arg("kind", UserKind::NonGuests).arg("limit", 50);
    /// let response = client.user().query(args, None).await?;
    /// ```
    pub async fn query(
        &self,
        args: Args,
        select: Option<Select>,
    ) -> Result<MondayResponse, MondayError> {
        let select = select.unwrap_or_else(|| Select::from(USER_DEFAULT_SELECT));
        let document = format!("query {{ users{args} {{ {select} }} }}");
        self.executor.execute(&document).await
    }
}
