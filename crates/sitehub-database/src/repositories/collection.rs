//! Per-collection repository.
//!
//! Every sub-collection shares one physical document but is reached through
//! its own typed repository, so callers never handle raw JSON entries.

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::{Map, Value};

use sitehub_core::result::AppResult;
use sitehub_core::types::EntryId;
use sitehub_entity::{
    Advantage, Collection, Member, NumberStat, Property, Satisfaction, Service, SiteEntry,
    SliderHeader, SocialNetwork,
};

use crate::store::{SiteInfoStore, StoredEntry};

/// Repository for the entries of one sub-collection of one website.
pub struct CollectionRepository<E> {
    store: Arc<dyn SiteInfoStore>,
    website: String,
    _entry: PhantomData<fn() -> E>,
}

/// Repository for [`Advantage`] entries.
pub type AdvantageRepository = CollectionRepository<Advantage>;
/// Repository for [`Service`] entries.
pub type ServiceRepository = CollectionRepository<Service>;
/// Repository for [`Member`] entries.
pub type MemberRepository = CollectionRepository<Member>;
/// Repository for [`Satisfaction`] entries.
pub type SatisfactionRepository = CollectionRepository<Satisfaction>;
/// Repository for [`SocialNetwork`] entries.
pub type SocialNetworkRepository = CollectionRepository<SocialNetwork>;
/// Repository for [`SliderHeader`] entries.
pub type SliderHeaderRepository = CollectionRepository<SliderHeader>;
/// Repository for [`Property`] entries.
pub type PropertyRepository = CollectionRepository<Property>;
/// Repository for [`NumberStat`] entries.
pub type NumberStatRepository = CollectionRepository<NumberStat>;

impl<E> Clone for CollectionRepository<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            website: self.website.clone(),
            _entry: PhantomData,
        }
    }
}

impl<E: SiteEntry> CollectionRepository<E> {
    /// Create a repository scoped to `website`.
    pub fn new(store: Arc<dyn SiteInfoStore>, website: impl Into<String>) -> Self {
        Self {
            store,
            website: website.into(),
            _entry: PhantomData,
        }
    }

    /// The sub-collection this repository manages.
    pub fn collection(&self) -> Collection {
        E::COLLECTION
    }

    /// The website this repository is scoped to.
    pub fn website(&self) -> &str {
        &self.website
    }

    /// Whether another entry already holds `value` in `field`.
    pub async fn key_exists(
        &self,
        field: &str,
        value: &str,
        exclude: Option<EntryId>,
    ) -> AppResult<bool> {
        self.store
            .key_exists(&self.website, E::COLLECTION, field, value, exclude)
            .await
    }

    /// Append a new entry. `None` when the site-info document is missing.
    pub async fn insert(&self, fields: Map<String, Value>) -> AppResult<Option<E>> {
        self.store
            .push_entry(&self.website, E::COLLECTION, fields)
            .await?
            .map(decode)
            .transpose()
    }

    /// Find an entry by id.
    pub async fn find(&self, id: EntryId) -> AppResult<Option<E>> {
        self.store
            .find_entry(&self.website, E::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }

    /// All entries, in insertion order.
    pub async fn list(&self) -> AppResult<Vec<E>> {
        self.store
            .list_entries(&self.website, E::COLLECTION)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Overwrite only the fields present in `patch`.
    pub async fn update_fields(
        &self,
        id: EntryId,
        patch: Map<String, Value>,
    ) -> AppResult<Option<E>> {
        self.store
            .update_entry_fields(&self.website, E::COLLECTION, id, patch)
            .await?
            .map(decode)
            .transpose()
    }

    /// Remove an entry, returning it when it existed.
    pub async fn remove(&self, id: EntryId) -> AppResult<Option<E>> {
        self.store
            .pull_entry(&self.website, E::COLLECTION, id)
            .await?
            .map(decode)
            .transpose()
    }
}

fn decode<E: SiteEntry>(entry: StoredEntry) -> AppResult<E> {
    Ok(serde_json::from_value(entry.into_json())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySiteInfoStore;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    async fn repository() -> AdvantageRepository {
        let store = Arc::new(MemorySiteInfoStore::new());
        store.ensure_document("landing-page").await.expect("ensure");
        AdvantageRepository::new(store, "landing-page")
    }

    #[tokio::test]
    async fn test_insert_and_find_typed_entry() {
        let repo = repository().await;
        let added = repo
            .insert(fields(json!({
                "englishTitle": "Fast",
                "englishContent": "c",
                "germanTitle": "Schnell",
                "germanContent": "c",
                "icon": "http://localhost/images/a.png",
                "createdAt": 10
            })))
            .await
            .expect("insert")
            .expect("document");
        assert_eq!(added.english_title, "Fast");

        let found = repo.find(added.id).await.expect("find").expect("present");
        assert_eq!(found, added);
        assert_eq!(repo.list().await.expect("list"), vec![added]);
    }

    #[tokio::test]
    async fn test_malformed_stored_entry_is_serialization_error() {
        let repo = repository().await;
        let err = repo
            .insert(fields(json!({"englishTitle": "only a title"})))
            .await
            .expect_err("missing fields");
        assert_eq!(err.kind, sitehub_core::ErrorKind::Serialization);
    }
}
