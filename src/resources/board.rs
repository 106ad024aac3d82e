//! The `boards` resource.

use std::sync::Arc;

use crate::clients::{MondayError, MondayResponse, RequestExecutor};
use crate::resources::{ArgValue, Args, Select};

/// Fields returned by board operations when no selection is given.
pub const BOARD_DEFAULT_SELECT: &[&str] = &["id", "name", "description"];

/// Visibility of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardKind {
    /// Visible to every member of the account.
    Public,
    /// Visible to invited members only.
    Private,
    /// Shareable with guests.
    Share,
}

impl From<BoardKind> for ArgValue {
    fn from(kind: BoardKind) -> Self {
        let value = match kind {
            BoardKind::Public => "public",
            BoardKind::Private => "private",
            BoardKind::Share => "share",
        };
        Self::enum_value(value)
    }
}

/// Boards of the account.
#[derive(Clone, Debug)]
pub struct Board {
    executor: Arc<RequestExecutor>,
}

impl Board {
    pub(crate) fn new(executor: Arc<RequestExecutor>) -> Self {
        Self { executor }
    }

    /// Retrieves boards.
    ///
    /// Supported arguments include `ids`, `board_kind`, `state`,
    /// `workspace_ids`, `limit`, and `page`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    pub async fn query(
        &self,
        args: Args,
        select: Option<Select>,
    ) -> Result<MondayResponse, MondayError> {
        let select = select.unwrap_or_else(|| Select::from(BOARD_DEFAULT_SELECT));
        let document = format!("query {{ boards{args} {{ {select} }} }}");
        self.executor.execute(&document).await
    }

    /// Creates a board.
    ///
    /// `args` may add optional arguments such as `workspace_id`,
    /// `folder_id`, `description`, or `template_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use monday_api::resources::{Args, BoardKind};
    ///
    /// let response = client
    ///     .board()
    ///     .create("Roadmap", BoardKind::Public, Args::new().arg("workspace_id", 42), None)
    ///     .await?;
    /// ```
    pub async fn create(
        &self,
        board_name: &str,
        board_kind: BoardKind,
        args: Args,
        select: Option<Select>,
    ) -> Result<MondayResponse, MondayError> {
        let args = Args::new()
            .arg("board_name", board_name)
            .arg("board_kind", board_kind)
            .merge(args);
        let select = select.unwrap_or_else(|| Select::from(BOARD_DEFAULT_SELECT));

        let document = format!("mutation {{ create_board{args} {{ {select} }} }}");
        self.executor.execute(&document).await
    }

    /// Archives a board.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    pub async fn archive(
        &self,
        board_id: i64,
        select: Option<Select>,
    ) -> Result<MondayResponse, MondayError> {
        self.board_mutation("archive_board", board_id, select).await
    }

    /// Deletes a board.
    ///
    /// # Errors
    ///
    /// Returns [`MondayError`] if the request fails or is rejected.
    pub async fn delete(
        &self,
        board_id: i64,
        select: Option<Select>,
    ) -> Result<MondayResponse, MondayError> {
        self.board_mutation("delete_board", board_id, select).await
    }

    async fn board_mutation(
        &self,
        mutation: &str,
        board_id: i64,
        select: Option<Select>,
    ) -> Result<MondayResponse, MondayError> {
        let args = Args::new().arg("board_id", board_id);
        let select = select.unwrap_or_else(|| Select::new(["id"]));

        let document = format!("mutation {{ {mutation}{args} {{ {select} }} }}");
        self.executor.execute(&document).await
    }
}
