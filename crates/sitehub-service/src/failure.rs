//! Boundary between infrastructure failures and operation results.

use tracing::error;

use sitehub_core::error::{AppError, ErrorKind, INTERNAL_MESSAGE};

/// Pass domain errors through; log anything from the store or the
/// filesystem and replace it with the generic internal error.
pub(crate) fn surface(err: AppError, operation: &str) -> AppError {
    if err.kind.is_infrastructure() || err.kind == ErrorKind::Internal {
        error!(operation, kind = %err.kind, error = %err, "Site-info operation failed");
        AppError::internal(INTERNAL_MESSAGE)
    } else {
        err
    }
}

/// Error for a missing document, entry or header field.
pub(crate) fn not_found() -> AppError {
    AppError::not_found("Requested content was not found")
}
