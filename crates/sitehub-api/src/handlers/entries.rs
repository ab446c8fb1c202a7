//! Collection entry handlers, shared by the panel and website routers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde_json::Value;
use tracing::debug;

use sitehub_core::error::AppError;
use sitehub_core::result::AppResult;
use sitehub_entity::Collection;
use sitehub_service::CollectionOperations;

use crate::dto::request::EditEntryRequest;
use crate::dto::response::Outcome;
use crate::error::ApiError;
use crate::extractors::{AdminUser, ValidatedJson};
use crate::state::AppState;

fn operations<'a>(state: &'a AppState, kind: &str) -> AppResult<&'a dyn CollectionOperations> {
    let collection: Collection = kind.parse()?;
    Ok(state.site_info.collection(collection))
}

/// POST /panel/site-info/{kind}
///
/// A body that is not JSON is rejected like any other invalid draft (422).
pub async fn add_entry(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(kind): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Outcome, ApiError> {
    let Json(draft) = body.map_err(|rejection| AppError::validation(rejection.body_text()))?;
    let ops = match operations(&state, &kind) {
        Ok(ops) => ops,
        Err(err) => return Ok(Outcome::failed(err)),
    };
    debug!(admin = %admin.sub, collection = %kind, "Adding entry");
    Ok(Outcome::from(ops.add_json(draft).await))
}

/// GET /panel/site-info/{kind}, GET /website/site-info/{kind}
pub async fn list_entries(State(state): State<AppState>, Path(kind): Path<String>) -> Outcome {
    match operations(&state, &kind) {
        Ok(ops) => Outcome::from(ops.list_json().await),
        Err(err) => Outcome::failed(err),
    }
}

/// GET /panel/site-info/{kind}/{id}, GET /website/site-info/{kind}/{id}
pub async fn get_entry(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Outcome {
    match operations(&state, &kind) {
        Ok(ops) => Outcome::from(ops.get_json(&id).await),
        Err(err) => Outcome::failed(err),
    }
}

/// PATCH /panel/site-info/{kind}/{id}
pub async fn edit_entry(
    State(state): State<AppState>,
    admin: AdminUser,
    Path((kind, id)): Path<(String, String)>,
    ValidatedJson(req): ValidatedJson<EditEntryRequest>,
) -> Outcome {
    let ops = match operations(&state, &kind) {
        Ok(ops) => ops,
        Err(err) => return Outcome::failed(err),
    };
    debug!(admin = %admin.sub, collection = %kind, id = %id, "Editing entry");
    Outcome::from(ops.edit_json(&id, req.updates).await)
}

/// DELETE /panel/site-info/{kind}/{id}
pub async fn delete_entry(
    State(state): State<AppState>,
    admin: AdminUser,
    Path((kind, id)): Path<(String, String)>,
) -> Outcome {
    let ops = match operations(&state, &kind) {
        Ok(ops) => ops,
        Err(err) => return Outcome::failed(err),
    };
    debug!(admin = %admin.sub, collection = %kind, id = %id, "Deleting entry");
    Outcome::from(ops.delete_json(&id).await)
}
