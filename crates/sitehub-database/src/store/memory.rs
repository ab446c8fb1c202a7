//! In-process document store.
//!
//! Backs tests and single-node deployments without PostgreSQL. All writes
//! take the store-wide write lock, so the unique-key check and the write it
//! guards are atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::debug;

use sitehub_core::result::AppResult;
use sitehub_core::types::EntryId;
use sitehub_entity::{Collection, SiteInfo};

use super::{SiteInfoStore, StoredEntry, site_info_from_fields, unique_values};

#[derive(Debug, Default)]
struct Document {
    fields: Map<String, Value>,
    collections: HashMap<Collection, Vec<StoredEntry>>,
}

impl Document {
    fn entries(&self, collection: Collection) -> &[StoredEntry] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn has_key(
        &self,
        collection: Collection,
        field: &str,
        value: &str,
        exclude: Option<EntryId>,
    ) -> bool {
        self.entries(collection).iter().any(|entry| {
            Some(entry.id) != exclude
                && entry.fields.get(field).and_then(Value::as_str) == Some(value)
        })
    }

    fn check_unique(
        &self,
        collection: Collection,
        fields: &Map<String, Value>,
        exclude: Option<EntryId>,
    ) -> AppResult<()> {
        for (key, value) in unique_values(collection, fields) {
            if self.has_key(collection, key.field, value, exclude) {
                return Err(key.duplicate_error());
            }
        }
        Ok(())
    }
}

/// Document store kept entirely in memory.
#[derive(Debug, Default)]
pub struct MemorySiteInfoStore {
    documents: RwLock<HashMap<String, Document>>,
}

impl MemorySiteInfoStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SiteInfoStore for MemorySiteInfoStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }

    async fn ensure_document(&self, website: &str) -> AppResult<SiteInfo> {
        let mut documents = self.documents.write().await;
        let document = documents.entry(website.to_string()).or_insert_with(|| {
            debug!(website, "Creating site-info document");
            Document::default()
        });
        site_info_from_fields(website, document.fields.clone())
    }

    async fn find_document(&self, website: &str) -> AppResult<Option<SiteInfo>> {
        let documents = self.documents.read().await;
        documents
            .get(website)
            .map(|doc| site_info_from_fields(website, doc.fields.clone()))
            .transpose()
    }

    async fn set_document_fields(
        &self,
        website: &str,
        patch: Map<String, Value>,
    ) -> AppResult<Option<SiteInfo>> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents.get_mut(website) else {
            return Ok(None);
        };
        document.fields.extend(patch);
        site_info_from_fields(website, document.fields.clone()).map(Some)
    }

    async fn key_exists(
        &self,
        website: &str,
        collection: Collection,
        field: &str,
        value: &str,
        exclude: Option<EntryId>,
    ) -> AppResult<bool> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(website)
            .is_some_and(|doc| doc.has_key(collection, field, value, exclude)))
    }

    async fn push_entry(
        &self,
        website: &str,
        collection: Collection,
        fields: Map<String, Value>,
    ) -> AppResult<Option<StoredEntry>> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents.get_mut(website) else {
            return Ok(None);
        };
        document.check_unique(collection, &fields, None)?;

        let entry = StoredEntry {
            id: EntryId::new(),
            fields,
        };
        document
            .collections
            .entry(collection)
            .or_default()
            .push(entry.clone());
        Ok(Some(entry))
    }

    async fn find_entry(
        &self,
        website: &str,
        collection: Collection,
        id: EntryId,
    ) -> AppResult<Option<StoredEntry>> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(website)
            .and_then(|doc| doc.entries(collection).iter().find(|e| e.id == id).cloned()))
    }

    async fn list_entries(
        &self,
        website: &str,
        collection: Collection,
    ) -> AppResult<Vec<StoredEntry>> {
        let documents = self.documents.read().await;
        Ok(documents
            .get(website)
            .map(|doc| doc.entries(collection).to_vec())
            .unwrap_or_default())
    }

    async fn update_entry_fields(
        &self,
        website: &str,
        collection: Collection,
        id: EntryId,
        patch: Map<String, Value>,
    ) -> AppResult<Option<StoredEntry>> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents.get_mut(website) else {
            return Ok(None);
        };
        if !document.entries(collection).iter().any(|e| e.id == id) {
            return Ok(None);
        }
        document.check_unique(collection, &patch, Some(id))?;

        let entry = document
            .collections
            .get_mut(&collection)
            .and_then(|entries| entries.iter_mut().find(|e| e.id == id));
        Ok(entry.map(|entry| {
            entry.fields.extend(patch);
            entry.clone()
        }))
    }

    async fn pull_entry(
        &self,
        website: &str,
        collection: Collection,
        id: EntryId,
    ) -> AppResult<Option<StoredEntry>> {
        let mut documents = self.documents.write().await;
        let Some(entries) = documents
            .get_mut(website)
            .and_then(|doc| doc.collections.get_mut(&collection))
        else {
            return Ok(None);
        };
        Ok(entries
            .iter()
            .position(|e| e.id == id)
            .map(|index| entries.remove(index)))
    }
}
