//! Result shapes handed to callers of site-info operations.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, INTERNAL_MESSAGE};
use crate::result::AppResult;

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
    /// Optional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Error half of an [`OperationOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeError {
    /// Human-readable message.
    pub message: String,
    /// HTTP status code the failure maps to.
    pub status_code: u16,
}

/// `{ success: true, outputs } | { success: false, error: { message, statusCode } }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationOutcome<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Operation outputs on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<T>,
    /// Failure description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<OutcomeError>,
}

impl<T> OperationOutcome<T> {
    /// A successful outcome carrying `outputs`.
    pub fn ok(outputs: T) -> Self {
        Self {
            success: true,
            outputs: Some(outputs),
            error: None,
        }
    }

    /// A failed outcome. Infrastructure errors are reported generically.
    pub fn failed(err: &AppError) -> Self {
        let message = if err.kind.is_infrastructure() {
            INTERNAL_MESSAGE.to_string()
        } else {
            err.message.clone()
        };
        Self {
            success: false,
            outputs: None,
            error: Some(OutcomeError {
                message,
                status_code: err.status_code(),
            }),
        }
    }
}

impl<T> From<AppResult<T>> for OperationOutcome<T> {
    fn from(result: AppResult<T>) -> Self {
        match result {
            Ok(outputs) => Self::ok(outputs),
            Err(err) => Self::failed(&err),
        }
    }
}
