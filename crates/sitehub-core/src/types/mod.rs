//! Core type definitions used across the SiteHub workspace.

pub mod id;
pub mod response;

pub use id::*;
pub use response::{ApiErrorResponse, OperationOutcome, OutcomeError};
