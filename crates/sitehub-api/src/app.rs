//! Application wiring and server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use sitehub_core::config::AppConfig;
use sitehub_core::config::database::DatabaseConfig;
use sitehub_core::error::AppError;
use sitehub_database::migration::run_migrations;
use sitehub_database::{DatabasePool, MemorySiteInfoStore, PgSiteInfoStore, SiteInfoStore};
use sitehub_service::SiteInfoService;
use sitehub_storage::{ImageService, LocalStorageProvider};

use crate::router::build_router;
use crate::state::AppState;

/// Build the Axum application from the shared state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Wire every layer from `config` and serve until shutdown.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting SiteHub v{}", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config.database).await?;

    let provider = Arc::new(LocalStorageProvider::new(&config.storage.data_root).await?);
    info!(root = %provider.root().display(), "Image storage ready");
    let images = Arc::new(ImageService::new(provider, &config.storage));

    let site_info =
        SiteInfoService::new(store, images.clone(), config.site.website_name.clone());
    if config.site.seed_document {
        site_info.seed().await?;
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| AppError::configuration(format!("Invalid bind address: {e}")))?;

    let app = build_app(AppState::new(config, site_info, images));

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;
    info!("SiteHub listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    info!("SiteHub shut down");
    Ok(())
}

/// Open the configured document store, running migrations when asked to.
async fn open_store(config: &DatabaseConfig) -> Result<Arc<dyn SiteInfoStore>, AppError> {
    if !config.is_postgres() {
        warn!("Using the in-memory document store; content is lost on restart");
        return Ok(Arc::new(MemorySiteInfoStore::new()));
    }

    info!("Connecting to database...");
    let db = DatabasePool::connect(config).await?;
    if config.run_migrations {
        info!("Running database migrations...");
        run_migrations(db.pool()).await?;
    }
    Ok(Arc::new(PgSiteInfoStore::new(&db)))
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
