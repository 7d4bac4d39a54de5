//! Success/failure envelopes returned by every service operation.
//!
//! Services never let an [`crate::error::AppError`] escape to the HTTP
//! layer: the `From` conversions in this module are the boundary where
//! errors collapse into failure envelopes. The envelope fields are
//! private so that only the factory functions can build one, which makes
//! "a failure never carries data" a property of the type rather than a
//! convention.

use serde::{Deserialize, Serialize};

use crate::result::AppResult;
use crate::types::pagination::PageRequest;

const OK_MESSAGE: &str = "OK";

/// Standard envelope for single-outcome operations.
///
/// Serialized as `{"success": ..., "message": ..., "data": ...}` with
/// `data` omitted entirely on the failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    success: bool,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Build a success envelope with the default `"OK"` message.
    pub fn ok(data: T) -> Self {
        Self::ok_with(data, OK_MESSAGE)
    }

    /// Build a success envelope with a custom message.
    pub fn ok_with(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Build a failure envelope. Failure envelopes carry no data.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Whether the operation completed without a caught failure.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Human-readable status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The payload, present only on the success path.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Consume the envelope, returning the payload if present.
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T: Serialize> From<AppResult<T>> for ApiResponse<T> {
    /// Service-boundary conversion: an `Err` collapses into a failure
    /// envelope carrying the error's message, stack detail discarded.
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(err) => {
                tracing::debug!(kind = %err.kind, error = %err.message, "operation failed");
                Self::fail(err.message)
            }
        }
    }
}

/// Envelope for windowed sequence operations.
///
/// Extends [`ApiResponse`] with pagination metadata. `totalCount` is the
/// size of the full filtered set server-side, independent of the window
/// actually returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResponse<T: Serialize> {
    success: bool,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Vec<T>>,
    page: u64,
    page_size: u64,
    total_count: u64,
    total_pages: u64,
    has_previous: bool,
    has_next: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl<T: Serialize> PagedResponse<T> {
    /// Build a success envelope with derived pagination metadata.
    ///
    /// Taking a [`PageRequest`] rather than raw numbers means `page_size`
    /// is already clamped to at least 1, so `total_pages` never divides
    /// by zero.
    pub fn success(items: Vec<T>, total_count: u64, request: &PageRequest) -> Self {
        Self::success_with(items, total_count, request, OK_MESSAGE)
    }

    /// Build a success envelope with a custom message.
    pub fn success_with(
        items: Vec<T>,
        total_count: u64,
        request: &PageRequest,
        message: impl Into<String>,
    ) -> Self {
        debug_assert!(items.len() as u64 <= request.page_size);
        let total_pages = total_count.div_ceil(request.page_size);
        Self {
            success: true,
            message: message.into(),
            data: Some(items),
            page: request.page,
            page_size: request.page_size,
            total_count,
            total_pages,
            has_previous: request.page > 1,
            has_next: request.page < total_pages,
            errors: Vec::new(),
        }
    }

    /// Build a failure envelope with a single message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::failure_all(Vec::new(), message)
    }

    /// Build a failure envelope aggregating multiple error strings
    /// alongside a summary message.
    pub fn failure_all(errors: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            page: 0,
            page_size: 0,
            total_count: 0,
            total_pages: 0,
            has_previous: false,
            has_next: false,
            errors,
        }
    }

    /// Service-boundary conversion from a `(rows, total count)` repository
    /// outcome. An `Err` collapses into a failure envelope.
    pub fn from_rows(result: AppResult<(Vec<T>, u64)>, request: &PageRequest) -> Self {
        match result {
            Ok((rows, total_count)) => Self::success(rows, total_count, request),
            Err(err) => {
                tracing::debug!(kind = %err.kind, error = %err.message, "paged operation failed");
                Self::failure(err.message)
            }
        }
    }

    /// Whether the operation completed without a caught failure.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Human-readable status message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The window of items, present only on the success path.
    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    /// Current page number (1-based).
    pub fn page(&self) -> u64 {
        self.page
    }

    /// Number of items per page.
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Total number of items across all pages.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.has_previous
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.has_next
    }

    /// Aggregated validation messages, failure path only.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
