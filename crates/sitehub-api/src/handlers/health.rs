//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_ok = state.site_info.health_check().await.unwrap_or(false);
    Json(HealthResponse {
        status: if database_ok { "ok" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        website: state.site_info.website().to_string(),
        database: state.site_info.backend().to_string(),
        database_ok,
    })
}
