//! Repository for the header fields of the site-info document.

use std::sync::Arc;

use serde_json::{Map, Value};

use sitehub_core::result::AppResult;
use sitehub_entity::SiteInfo;

use crate::store::SiteInfoStore;

/// Access to the singleton document of one website.
#[derive(Clone)]
pub struct SiteInfoRepository {
    store: Arc<dyn SiteInfoStore>,
    website: String,
}

impl SiteInfoRepository {
    /// Create a repository scoped to `website`.
    pub fn new(store: Arc<dyn SiteInfoStore>, website: impl Into<String>) -> Self {
        Self {
            store,
            website: website.into(),
        }
    }

    /// The website this repository is scoped to.
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Create the document if needed.
    pub async fn ensure(&self) -> AppResult<SiteInfo> {
        self.store.ensure_document(&self.website).await
    }

    /// Load the document header.
    pub async fn find(&self) -> AppResult<Option<SiteInfo>> {
        self.store.find_document(&self.website).await
    }

    /// Overwrite one header field.
    pub async fn set_field(&self, name: &str, value: Value) -> AppResult<Option<SiteInfo>> {
        let mut patch = Map::new();
        patch.insert(name.to_string(), value);
        self.store.set_document_fields(&self.website, patch).await
    }
}
