//! # assethub-api
//!
//! HTTP boundary for AssetHub built on Axum.
//!
//! Maps service envelopes to HTTP responses, maps errors that escape
//! outside an envelope to status codes, and extracts pagination/sorting
//! query parameters.

pub mod error;
pub mod extractors;
pub mod respond;

pub use error::ApiError;
pub use respond::{respond, respond_page};
