//! Request handlers, grouped by resource.

pub mod entries;
pub mod header;
pub mod health;
pub mod images;
pub mod snapshot;
