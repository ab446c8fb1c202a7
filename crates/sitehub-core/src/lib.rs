//! # sitehub-core
//!
//! Core crate for SiteHub. Contains the unified error system, configuration
//! schemas, typed identifiers, the operation outcome shape, and the storage
//! and image traits implemented by other crates.
//!
//! This crate has **no** internal dependencies on other SiteHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
