//! Request execution for the monday.com GraphQL API.
//!
//! # Overview
//!
//! - [`HttpClient`]: transport, one POST per call
//! - [`MondayResponse`]: status, headers, and parsed body of a response
//! - [`RequestExecutor`]: posts a document and classifies the outcome
//! - [`MondayError`], [`ApiError`], [`ErrorKind`]: the error taxonomy
//! - [`status_code_error_kind`], [`error_code_error_kind`]: classification tables
//!
//! # Example
//!
//! ```rust,ignore
//! use monday_api::{ApiToken, MondayConfig};
//! use monday_api::clients::RequestExecutor;
//!
//! let config = MondayConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let executor = RequestExecutor::new(&config);
//! let response = executor.execute("query { me { id } }").await?;
//! ```

mod errors;
mod executor;
mod http_client;
mod http_response;
mod mapping;

pub use errors::{ApiError, ErrorKind, MondayError};
pub use executor::RequestExecutor;
pub use http_client::{HttpClient, RawResponse, SDK_VERSION};
pub use http_response::MondayResponse;
pub use mapping::{error_code_error_kind, status_code_error_kind};
