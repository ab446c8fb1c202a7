//! `AdminUser` extractor: pulls the JWT from the Authorization header and
//! requires the admin role.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use sitehub_core::error::AppError;

use crate::auth::AdminClaims;
use crate::error::ApiError;
use crate::state::AppState;

/// An authenticated admin.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AdminClaims);

impl std::ops::Deref for AdminUser {
    type Target = AdminClaims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already verified by the panel guard.
        if let Some(claims) = parts.extensions.get::<AdminClaims>() {
            return Ok(AdminUser(claims.clone()));
        }

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        let claims = state.admin_tokens.decode_admin_token(token)?;
        Ok(AdminUser(claims))
    }
}
