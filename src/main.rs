//! SiteHub server: site-info content backend for a bilingual website.
//!
//! Main entry point that loads configuration, sets up logging and starts
//! the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use sitehub_core::config::AppConfig;
use sitehub_core::config::logging::LoggingConfig;

#[tokio::main]
async fn main() {
    let env = std::env::var("SITEHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::info!(env = %env, website = %config.site.website_name, "Configuration loaded");

    if let Err(e) = sitehub_api::run_server(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}
