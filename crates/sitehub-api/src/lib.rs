//! # sitehub-api
//!
//! HTTP API layer for SiteHub built on Axum.
//!
//! Serves the admin panel routes (guarded by an admin bearer token), the
//! public website routes, stored images and a health check. Operation
//! results travel in the `OperationOutcome` envelope; failures outside an
//! operation use the plain error body.

pub mod app;
pub mod auth;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
