//! Core type definitions used across the AssetHub workspace.

pub mod pagination;
pub mod response;
pub mod sorting;

pub use pagination::PageRequest;
pub use response::{ApiResponse, PagedResponse};
pub use sorting::{SortDirection, SortField};
