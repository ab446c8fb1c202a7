//! Image storage: format detection and the URL-addressed image service.

pub mod format;
pub mod service;

pub use format::ImageKind;
pub use service::ImageService;
