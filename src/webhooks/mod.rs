//! Webhook support for the monday.com API client.
//!
//! Subscriptions are managed through the [`Webhook`](crate::resources::Webhook)
//! resource. This module covers the receiving side:
//!
//! - [`WebhookEvent`]: events a subscription can listen to
//! - [`challenge_response`]: reply to monday's URL verification handshake
//! - [`verify_authorization`]: check the signed token on app webhook calls
//! - [`WebhookError`]: errors from the helpers above
//!
//! # Example
//!
//! ```rust
//! use monday_api::webhooks::{challenge_response, WebhookError};
//!
//! fn handle(body: &[u8]) -> Result<String, WebhookError> {
//!     let reply = challenge_response(body)?;
//!     Ok(reply.to_string())
//! }
//!
//! assert_eq!(handle(br#"{"challenge":"xyz"}"#).unwrap(), r#"{"challenge":"xyz"}"#);
//! ```

mod errors;
mod types;
mod verification;

pub use errors::WebhookError;
pub use types::WebhookEvent;
pub use verification::{
    challenge_response, verify_authorization, WebhookClaims, HEADER_AUTHORIZATION,
};
