//! Route definitions for the panel, the public website, images and health.

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_middleware;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use sitehub_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;
    let body_limit = server.body_limit_bytes;
    let timeout = Duration::from_secs(server.request_timeout_seconds);
    let cors = middleware::cors::build_cors_layer(&server.cors);

    Router::new()
        .merge(panel_routes(state.clone()))
        .merge(website_routes())
        .route("/images/{file}", get(handlers::images::serve_image))
        .route("/health", get(handlers::health::health))
        .fallback(unknown_route)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Admin panel: every route requires an admin token.
fn panel_routes(state: AppState) -> Router<AppState> {
    use handlers::{entries, header, snapshot};

    Router::new()
        .route("/panel/site-info", get(snapshot::site_snapshot))
        .route(
            "/panel/site-info/logo",
            get(header::get_logo).put(header::set_logo),
        )
        .route(
            "/panel/site-info/banner",
            get(header::get_banner).put(header::update_banner),
        )
        .route(
            "/panel/site-info/footer",
            get(header::get_footer).put(header::update_footer),
        )
        .route(
            "/panel/site-info/about-us",
            get(header::get_about_us).put(header::update_about_us),
        )
        .route(
            "/panel/site-info/{kind}",
            get(entries::list_entries).post(entries::add_entry),
        )
        .route(
            "/panel/site-info/{kind}/{id}",
            get(entries::get_entry)
                .patch(entries::edit_entry)
                .delete(entries::delete_entry),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state,
            middleware::admin::require_admin,
        ))
}

/// Public website: read-only.
fn website_routes() -> Router<AppState> {
    use handlers::{entries, header, snapshot};

    Router::new()
        .route("/website/site-info", get(snapshot::site_snapshot))
        .route("/website/site-info/logo", get(header::get_logo))
        .route("/website/site-info/banner", get(header::get_banner))
        .route("/website/site-info/footer", get(header::get_footer))
        .route("/website/site-info/about-us", get(header::get_about_us))
        .route("/website/site-info/{kind}", get(entries::list_entries))
        .route("/website/site-info/{kind}/{id}", get(entries::get_entry))
}

async fn unknown_route() -> ApiError {
    ApiError(AppError::not_found("Route not found"))
}
