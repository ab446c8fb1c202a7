//! Response envelopes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use sitehub_core::error::AppError;
use sitehub_core::result::AppResult;
use sitehub_core::types::OperationOutcome;

/// The result of one site-info operation, answered as an
/// [`OperationOutcome`] with the matching status code.
#[derive(Debug)]
pub struct Outcome(pub AppResult<Value>);

impl Outcome {
    /// A failure that happened before the operation ran.
    pub fn failed(err: AppError) -> Self {
        Self(Err(err))
    }

    /// Serialize `value` under `key` as the operation outputs.
    pub fn keyed<T: Serialize>(key: &str, result: AppResult<T>) -> Self {
        Self(result.and_then(|value| {
            let mut outputs = Map::new();
            outputs.insert(key.to_string(), serde_json::to_value(value)?);
            Ok(Value::Object(outputs))
        }))
    }
}

impl From<AppResult<Value>> for Outcome {
    fn from(result: AppResult<Value>) -> Self {
        Self(result)
    }
}

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Ok(_) => StatusCode::OK,
            Err(err) => {
                if err.kind.is_infrastructure() {
                    tracing::error!(error = %err, "Operation failed");
                }
                StatusCode::from_u16(err.status_code())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
        };
        (status, Json(OperationOutcome::from(self.0))).into_response()
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Server version.
    pub version: String,
    /// Website served.
    pub website: String,
    /// Document store backend.
    pub database: String,
    /// Whether the document store answered.
    pub database_ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::json;

    async fn parts(outcome: Outcome) -> (StatusCode, Value) {
        let response = outcome.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, serde_json::from_slice(&bytes).expect("json"))
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let (status, body) = parts(Outcome::keyed("logo", Ok("http://x/images/a.png"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "outputs": {"logo": "http://x/images/a.png"}})
        );
    }

    #[tokio::test]
    async fn test_failure_envelope_carries_status() {
        let (status, body) = parts(Outcome::failed(AppError::no_changes())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["statusCode"], 400);
        assert!(body.get("outputs").is_none());
    }

    #[tokio::test]
    async fn test_database_failure_is_generic() {
        let (status, body) = parts(Outcome::failed(AppError::database("connection reset"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["message"], "Internal server error");
    }
}
