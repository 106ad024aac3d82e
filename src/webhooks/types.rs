//! Webhook event types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::resources::ArgValue;

/// Board events a webhook can subscribe to.
///
/// Serializes to the GraphQL enum value used by `create_webhook`.
///
/// # Example
///
/// ```rust
/// use monday_api::webhooks::WebhookEvent;
///
/// let json = serde_json::to_string(&WebhookEvent::ChangeColumnValue).unwrap();
/// assert_eq!(json, "\"change_column_value\"");
/// assert_eq!(WebhookEvent::CreateItem.as_str(), "create_item");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEvent {
    /// Any column value changes.
    ChangeColumnValue,
    /// A status column changes. Requires a `columnId` config.
    ChangeStatusColumnValue,
    /// A specific column changes. Requires a `columnId` config.
    ChangeSpecificColumnValue,
    /// A subitem column value changes.
    ChangeSubitemColumnValue,
    /// An item is renamed.
    ChangeName,
    /// An item is created.
    CreateItem,
    /// An item is archived.
    ItemArchived,
    /// An item is deleted.
    ItemDeleted,
    /// An item moves to any group.
    ItemMovedToAnyGroup,
    /// An item moves to a specific group. Requires a `groupId` config.
    ItemMovedToSpecificGroup,
    /// An archived or deleted item is restored.
    ItemRestored,
    /// A subitem is created.
    CreateSubitem,
    /// A subitem is renamed.
    ChangeSubitemName,
    /// A subitem moves to another parent.
    MoveSubitem,
    /// A subitem is archived.
    SubitemArchived,
    /// A subitem is deleted.
    SubitemDeleted,
    /// A column is created.
    CreateColumn,
    /// An update is posted on an item.
    CreateUpdate,
    /// An update is edited.
    EditUpdate,
    /// An update is deleted.
    DeleteUpdate,
    /// An update is posted on a subitem.
    CreateSubitemUpdate,
}

impl WebhookEvent {
    /// Returns the GraphQL enum value for this event.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ChangeColumnValue => "change_column_value",
            Self::ChangeStatusColumnValue => "change_status_column_value",
            Self::ChangeSpecificColumnValue => "change_specific_column_value",
            Self::ChangeSubitemColumnValue => "change_subitem_column_value",
            Self::ChangeName => "change_name",
            Self::CreateItem => "create_item",
            Self::ItemArchived => "item_archived",
            Self::ItemDeleted => "item_deleted",
            Self::ItemMovedToAnyGroup => "item_moved_to_any_group",
            Self::ItemMovedToSpecificGroup => "item_moved_to_specific_group",
            Self::ItemRestored => "item_restored",
            Self::CreateSubitem => "create_subitem",
            Self::ChangeSubitemName => "change_subitem_name",
            Self::MoveSubitem => "move_subitem",
            Self::SubitemArchived => "subitem_archived",
            Self::SubitemDeleted => "subitem_deleted",
            Self::CreateColumn => "create_column",
            Self::CreateUpdate => "create_update",
            Self::EditUpdate => "edit_update",
            Self::DeleteUpdate => "delete_update",
            Self::CreateSubitemUpdate => "create_subitem_update",
        }
    }
}

impl fmt::Display for WebhookEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<WebhookEvent> for ArgValue {
    fn from(event: WebhookEvent) -> Self {
        Self::enum_value(event.as_str())
    }
}
