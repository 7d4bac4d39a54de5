//! # assethub-core
//!
//! Core crate for AssetHub. Contains the result envelope and pagination
//! types, sorting types, configuration schemas, the repository trait,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other AssetHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
