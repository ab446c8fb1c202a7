//! Website identity configuration.

use serde::{Deserialize, Serialize};

/// Which site-info document this instance serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Key of the singleton site-info document.
    #[serde(default = "default_website_name")]
    pub website_name: String,
    /// Create the document on startup when it does not exist yet.
    #[serde(default = "default_seed")]
    pub seed_document: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            website_name: default_website_name(),
            seed_document: default_seed(),
        }
    }
}

fn default_website_name() -> String {
    "landing-page".to_string()
}

fn default_seed() -> bool {
    true
}
