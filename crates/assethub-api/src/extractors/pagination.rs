//! Pagination and sorting query parameter extraction.

use serde::{Deserialize, Serialize};

use assethub_core::types::pagination::PageRequest;
use assethub_core::types::sorting::{SortDirection, SortField};

/// Query parameters for paginated endpoints, used via
/// `axum::extract::Query<PaginationParams>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 25, max: 100).
    #[serde(default = "default_page_size")]
    pub page_size: u64,
    /// Sort field (optional).
    pub sort_by: Option<String>,
    /// Sort direction: "asc" or "desc".
    #[serde(default)]
    pub sort_dir: SortDirection,
}

impl PaginationParams {
    /// The validated window these parameters describe.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// The requested sort, if any.
    pub fn sort_field(&self) -> Option<SortField> {
        self.sort_by
            .as_ref()
            .map(|field| SortField::new(field, self.sort_dir))
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
            sort_by: None,
            sort_dir: SortDirection::default(),
        }
    }
}

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    assethub_core::types::pagination::DEFAULT_PAGE_SIZE
}
