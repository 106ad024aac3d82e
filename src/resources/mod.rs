//! Resource facades for the monday.com API.
//!
//! Each facade formats a GraphQL document for one API entity and forwards it
//! to the shared [`RequestExecutor`](crate::clients::RequestExecutor). Facades
//! are obtained from a [`Client`](crate::Client):
//!
//! - [`Me`]: the authenticated user
//! - [`User`]: account users
//! - [`Webhook`]: webhook subscriptions
//! - [`Board`]: boards
//!
//! Every operation takes an optional [`Select`]; `None` uses the facade's
//! default field list.
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_api::resources::{Args, Select, UserKind};
//!
//! let me = client.me().query(None).await?;
//! let users = client
//!     .user()
//!     .query(Args::new().arg("kind", UserKind::Guests), Some(Select::new(["id", "email"])))
//!     .await?;
//! ```

mod board;
mod me;
mod query;
mod user;
mod webhook;

pub use board::{Board, BoardKind, BOARD_DEFAULT_SELECT};
pub use me::{Me, ME_DEFAULT_SELECT};
pub use query::{ArgValue, Args, Field, Select};
pub use user::{User, UserKind, USER_DEFAULT_SELECT};
pub use webhook::{Webhook, WEBHOOK_DEFAULT_SELECT, WEBHOOK_DELETE_SELECT};
