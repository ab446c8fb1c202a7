//! # sitehub-storage
//!
//! Blob storage for SiteHub. The local filesystem provider implements the
//! core [`StorageProvider`](sitehub_core::traits::StorageProvider) trait and
//! the [`ImageService`] builds the image store on top of it.

pub mod images;
pub mod providers;

pub use images::{ImageKind, ImageService};
pub use providers::LocalStorageProvider;
