//! The content document store.
//!
//! A store holds one site-info document per website: a set of header fields
//! plus ordered sub-collections of entries with generated identifiers.
//! Unique keys declared by each [`Collection`] are enforced by the store on
//! every write, so a concurrent writer that slipped past a service-level
//! pre-check still gets the matching duplicate error.

pub mod memory;
pub mod postgres;

pub use memory::MemorySiteInfoStore;
pub use postgres::PgSiteInfoStore;

use async_trait::async_trait;
use serde_json::{Map, Value};

use sitehub_core::result::AppResult;
use sitehub_core::types::EntryId;
use sitehub_entity::{Collection, SiteInfo, UniqueKey};

/// An entry as persisted: its identifier plus its raw fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry {
    /// Generated identifier.
    pub id: EntryId,
    /// Stored fields, excluding the identifier.
    pub fields: Map<String, Value>,
}

impl StoredEntry {
    /// The entry as one JSON object with its identifier under `_id`.
    pub fn into_json(self) -> Value {
        let mut fields = self.fields;
        fields.insert("_id".to_string(), Value::String(self.id.to_string()));
        Value::Object(fields)
    }
}

/// Async access to site-info documents.
#[async_trait]
pub trait SiteInfoStore: Send + Sync + 'static {
    /// Name of the backend, for logs and health output.
    fn backend(&self) -> &'static str;

    /// Check whether the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Create the document for `website` if it does not exist and return it.
    async fn ensure_document(&self, website: &str) -> AppResult<SiteInfo>;

    /// Load the header fields of the document for `website`.
    async fn find_document(&self, website: &str) -> AppResult<Option<SiteInfo>>;

    /// Overwrite the listed header fields. `None` when the document is absent.
    async fn set_document_fields(
        &self,
        website: &str,
        patch: Map<String, Value>,
    ) -> AppResult<Option<SiteInfo>>;

    /// Whether an entry of `collection` other than `exclude` has `field == value`.
    async fn key_exists(
        &self,
        website: &str,
        collection: Collection,
        field: &str,
        value: &str,
        exclude: Option<EntryId>,
    ) -> AppResult<bool>;

    /// Append a new entry with a generated identifier.
    /// `None` when the document is absent.
    async fn push_entry(
        &self,
        website: &str,
        collection: Collection,
        fields: Map<String, Value>,
    ) -> AppResult<Option<StoredEntry>>;

    /// Load one entry.
    async fn find_entry(
        &self,
        website: &str,
        collection: Collection,
        id: EntryId,
    ) -> AppResult<Option<StoredEntry>>;

    /// Load all entries of a collection in insertion order. Empty when the
    /// document is absent.
    async fn list_entries(&self, website: &str, collection: Collection)
    -> AppResult<Vec<StoredEntry>>;

    /// Overwrite only the listed fields of one entry.
    async fn update_entry_fields(
        &self,
        website: &str,
        collection: Collection,
        id: EntryId,
        patch: Map<String, Value>,
    ) -> AppResult<Option<StoredEntry>>;

    /// Remove one entry and return it.
    async fn pull_entry(
        &self,
        website: &str,
        collection: Collection,
        id: EntryId,
    ) -> AppResult<Option<StoredEntry>>;
}

/// The unique keys of `collection` present as strings in `fields`.
pub(crate) fn unique_values<'a>(
    collection: Collection,
    fields: &'a Map<String, Value>,
) -> impl Iterator<Item = (&'static UniqueKey, &'a str)> + 'a {
    collection
        .unique_keys()
        .iter()
        .filter_map(|key| fields.get(key.field).and_then(Value::as_str).map(|v| (key, v)))
}

/// Build a [`SiteInfo`] from stored header fields.
pub(crate) fn site_info_from_fields(
    website: &str,
    fields: Map<String, Value>,
) -> AppResult<SiteInfo> {
    let mut fields = fields;
    fields.insert(
        "websiteName".to_string(),
        Value::String(website.to_string()),
    );
    Ok(serde_json::from_value(Value::Object(fields))?)
}
