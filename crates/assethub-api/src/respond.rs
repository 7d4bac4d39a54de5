//! Envelope-to-response mapping used by every handler.
//!
//! A success envelope maps to 200, a failure envelope to 400, and the
//! serialized body is the full envelope in both cases. No other status
//! codes derive from the envelope itself; the mapping is a pure one-shot
//! function, so mapping the same envelope twice yields identical
//! responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use assethub_core::types::response::{ApiResponse, PagedResponse};

/// Map a single-outcome envelope to an HTTP response.
pub fn respond<T: Serialize>(envelope: ApiResponse<T>) -> Response {
    let status = if envelope.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(envelope)).into_response()
}

/// Map a paginated envelope to an HTTP response.
pub fn respond_page<T: Serialize>(envelope: PagedResponse<T>) -> Response {
    let status = if envelope.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Json(envelope)).into_response()
}
