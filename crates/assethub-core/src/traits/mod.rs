//! Core traits defined in `assethub-core` and implemented by other crates.

pub mod repository;

pub use repository::Repository;
