//! Blanket admin guard for the panel router.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::extractors::AdminUser;

/// Rejects requests without a valid admin token and hands the verified
/// claims to the handlers through the request extensions.
pub async fn require_admin(admin: AdminUser, mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(admin.0);
    next.run(request).await
}
