//! # monday.com API Rust client
//!
//! A Rust client for the monday.com GraphQL API. It builds GraphQL documents
//! for common resources, executes them, and turns HTTP and API failures into
//! a typed error.
//!
//! ## Overview
//!
//! - Type-safe configuration via [`MondayConfig`] and [`MondayConfigBuilder`]
//! - A [`Client`] with resource facades ([`resources::Me`], [`resources::User`],
//!   [`resources::Webhook`], [`resources::Board`]) and raw `query`/`mutate`
//! - Failure classification into [`ErrorKind`]s by HTTP status and API
//!   `error_code`
//! - Helpers for receiving webhooks in [`webhooks`]
//!
//! ## Quick Start
//!
//! ```rust
//! use monday_api::{ApiToken, ApiVersion, Client, MondayConfig};
//!
//! let config = MondayConfig::builder()
//!     .token(ApiToken::new("your-api-token").unwrap())
//!     .api_version(ApiVersion::latest())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::new(Some(&config)).unwrap();
//! ```
//!
//! ## Making Requests
//!
//! ```rust,ignore
//! use monday_api::{ErrorKind, MondayError};
//! use monday_api::resources::Select;
//!
//! match client.me().query(Some(Select::new(["id", "name"]))).await {
//!     Ok(response) => println!("Hello {}", response.body["data"]["me"]["name"]),
//!     Err(e) if e.kind() == ErrorKind::Authorization => eprintln!("check your token"),
//!     Err(e) => eprintln!("request failed: {e}"),
//! }
//! ```
//!
//! ## Error Classification
//!
//! - 2xx without `error_code`: the response is returned, even if it carries
//!   GraphQL `errors`
//! - any status with a top-level `error_code`: classified by the code
//! - any other non-2xx status: classified by the status
//! - no HTTP response at all: [`MondayError::Transport`]
//!
//! Nothing is retried; rate-limit errors expose the response so callers can
//! read `Retry-After` themselves.
//!
//! ## Design Principles
//!
//! - **Explicit configuration**: pass a config, or install a single
//!   process-wide default once at startup
//! - **Fail-fast validation**: all newtypes validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with Tokio async runtime

pub mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod resources;
pub mod webhooks;

pub use client::Client;
pub use config::{ApiToken, ApiVersion, HostUrl, MondayConfig, MondayConfigBuilder};
pub use error::ConfigError;

// Re-export request execution types
pub use clients::{ApiError, ErrorKind, MondayError, MondayResponse, RequestExecutor};
