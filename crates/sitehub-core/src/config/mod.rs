//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod site;
pub mod storage;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::auth::AuthConfig;
use self::database::DatabaseConfig;
use self::logging::LoggingConfig;
use self::site::SiteConfig;
use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Content document store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Image storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Panel authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Website identity settings.
    #[serde(default)]
    pub site: SiteConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `SITEHUB__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SITEHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize_from_empty_source() {
        let config: AppConfig = config::Config::builder()
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("empty config should use defaults");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.site.website_name, "landing-page");
        assert_eq!(config.database.backend, "memory");
        assert_eq!(
            config.storage.allowed_formats,
            vec!["svg", "png", "jpg", "jpeg"]
        );
    }

    #[test]
    fn test_section_override() {
        let config: AppConfig = config::Config::builder()
            .set_override("site.website_name", "shop")
            .and_then(|b| b.set_override("storage.max_image_size_bytes", 1024_i64))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .expect("override should deserialize");
        assert_eq!(config.site.website_name, "shop");
        assert_eq!(config.storage.max_image_size_bytes, 1024);
        assert_eq!(config.logging.level, "info");
    }
}
