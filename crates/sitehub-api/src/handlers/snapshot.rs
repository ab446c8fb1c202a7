//! Whole-site snapshot handler.

use axum::extract::State;

use crate::dto::response::Outcome;
use crate::state::AppState;

/// GET /panel/site-info, GET /website/site-info
pub async fn site_snapshot(State(state): State<AppState>) -> Outcome {
    Outcome::keyed("siteInfo", state.site_info.snapshot().await)
}
