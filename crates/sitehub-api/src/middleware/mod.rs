//! Tower/Axum middleware layers.

pub mod admin;
pub mod cors;
pub mod logging;
