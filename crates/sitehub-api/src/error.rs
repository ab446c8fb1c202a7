//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use sitehub_core::error::{AppError, INTERNAL_MESSAGE};
use sitehub_core::types::ApiErrorResponse;

/// An [`AppError`] on its way out as an HTTP response.
///
/// Used for failures that happen outside a site-info operation: the admin
/// guard, request decoding and image serving.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if err.kind.is_infrastructure() {
            tracing::error!(error = %err, "Request failed");
            INTERNAL_MESSAGE.to_string()
        } else {
            err.message
        };

        let body = ApiErrorResponse {
            error: err.kind.to_string(),
            message,
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn test_not_found_keeps_message() {
        let response =
            ApiError::from(AppError::not_found("Image not found: x.png")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_of(response).await;
        assert_eq!(body["error"], "NOT_FOUND");
        assert_eq!(body["message"], "Image not found: x.png");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_infrastructure_message_is_hidden() {
        let response =
            ApiError(AppError::storage("disk /var/data unreadable")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert_eq!(body["error"], "STORAGE");
        assert_eq!(body["message"], INTERNAL_MESSAGE);
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let response = ApiError(AppError::unauthorized("Missing Authorization header"))
            .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
