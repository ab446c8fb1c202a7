//! Custom Axum extractors.

pub mod admin;
pub mod validated;

pub use admin::AdminUser;
pub use validated::ValidatedJson;
