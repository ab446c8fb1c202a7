//! Shared application state injected into all handlers.

use std::sync::Arc;

use sitehub_core::config::AppConfig;
use sitehub_service::SiteInfoService;
use sitehub_storage::ImageService;

use crate::auth::AdminTokenDecoder;

/// Application state shared across all request handlers via Axum's `State`.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Site-info operations of the served website.
    pub site_info: Arc<SiteInfoService>,
    /// Stored image reader.
    pub images: Arc<ImageService>,
    /// Admin token verification.
    pub admin_tokens: Arc<AdminTokenDecoder>,
}

impl AppState {
    /// Assemble the state; the token decoder is derived from `config.auth`.
    pub fn new(config: AppConfig, site_info: SiteInfoService, images: Arc<ImageService>) -> Self {
        let admin_tokens = Arc::new(AdminTokenDecoder::new(&config.auth));
        Self {
            config: Arc::new(config),
            site_info: Arc::new(site_info),
            images,
            admin_tokens,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("website", &self.site_info.website())
            .finish_non_exhaustive()
    }
}
