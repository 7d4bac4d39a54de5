//! Request extractors for the AssetHub API.

pub mod pagination;

pub use pagination::PaginationParams;
