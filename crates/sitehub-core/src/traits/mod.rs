//! Core traits defined in `sitehub-core` and implemented by other crates.

pub mod image;
pub mod storage;

pub use image::ImageStore;
pub use storage::StorageProvider;
