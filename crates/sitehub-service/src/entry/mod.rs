//! Generic entry service shared by every sub-collection.

pub mod operations;
pub(crate) mod update;

pub use operations::CollectionOperations;

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};
use validator::Validate;

use sitehub_core::error::AppError;
use sitehub_core::result::AppResult;
use sitehub_core::traits::image::ImageStore;
use sitehub_core::types::EntryId;
use sitehub_database::repositories::CollectionRepository;
use sitehub_entity::{
    DraftImages, DraftParts, EntryDraft, ImageField, ImageFieldKind, ImageInput, SiteEntry,
};

use self::update::{EntryPatch, check_patch, normalize_unique_keys};
use crate::failure::{not_found, surface};
use crate::images::{StagedImages, discard, orphaned, urls_in};

/// All entries of a collection plus their count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryList<E> {
    pub items: Vec<E>,
    pub count: usize,
}

/// Add, read, edit and delete entries of one sub-collection.
pub struct EntryService<E: SiteEntry> {
    repo: CollectionRepository<E>,
    images: Arc<dyn ImageStore>,
}

impl<E: SiteEntry> Clone for EntryService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            images: Arc::clone(&self.images),
        }
    }
}

impl<E: SiteEntry> EntryService<E> {
    /// Creates a new entry service.
    pub fn new(repo: CollectionRepository<E>, images: Arc<dyn ImageStore>) -> Self {
        Self { repo, images }
    }

    /// Add an entry. Unique keys are trimmed and checked before any image
    /// is stored; the new entry is returned with its generated id.
    pub async fn add(&self, draft: E::Draft) -> AppResult<E> {
        self.try_add(draft)
            .await
            .map_err(|e| surface(e, &self.operation("add")))
    }

    /// Load one entry.
    pub async fn get(&self, id: EntryId) -> AppResult<E> {
        self.repo
            .find(id)
            .await
            .and_then(|entry| entry.ok_or_else(not_found))
            .map_err(|e| surface(e, &self.operation("get")))
    }

    /// Load every entry in insertion order.
    pub async fn get_all(&self) -> AppResult<EntryList<E>> {
        let items = self
            .repo
            .list()
            .await
            .map_err(|e| surface(e, &self.operation("get_all")))?;
        Ok(EntryList {
            count: items.len(),
            items,
        })
    }

    /// Apply a partial update.
    ///
    /// Only the editable fields of `E` are considered. Image fields accept a
    /// URL to keep or a payload to store; lists may mix both and keep their
    /// order. Images the entry no longer references are deleted once the
    /// update is saved.
    pub async fn edit(&self, id: EntryId, updates: Map<String, Value>) -> AppResult<E> {
        self.try_edit(id, updates)
            .await
            .map_err(|e| surface(e, &self.operation("edit")))
    }

    /// Remove an entry and delete its images. Removing an absent entry
    /// succeeds without effect.
    pub async fn delete(&self, id: EntryId) -> AppResult<()> {
        let removed = self
            .repo
            .remove(id)
            .await
            .map_err(|e| surface(e, &self.operation("delete")))?;

        match removed {
            Some(entry) => {
                for url in entry.image_urls() {
                    discard(self.images.as_ref(), &url).await;
                }
                info!(collection = %E::COLLECTION, entry_id = %id, "Entry deleted");
            }
            None => debug!(collection = %E::COLLECTION, entry_id = %id, "Entry already absent"),
        }
        Ok(())
    }

    fn operation(&self, name: &str) -> String {
        format!("{}.{name}", E::COLLECTION)
    }

    async fn try_add(&self, draft: E::Draft) -> AppResult<E> {
        draft
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        let DraftParts { mut fields, images } = draft.into_parts();
        normalize_unique_keys(E::COLLECTION, &mut fields)?;
        self.ensure_unique(&fields, None).await?;

        let mut staged = StagedImages::new(self.images.as_ref());
        let result = self.insert(&mut staged, fields, images).await;
        staged.finish(&result).await;

        let entry = result?;
        info!(collection = %E::COLLECTION, entry_id = %entry.id(), "Entry added");
        Ok(entry)
    }

    async fn insert(
        &self,
        staged: &mut StagedImages<'_>,
        mut fields: Map<String, Value>,
        images: Vec<(&'static str, DraftImages)>,
    ) -> AppResult<E> {
        for (name, images) in images {
            let value = match images {
                DraftImages::Single(payload) => Value::String(staged.store(payload).await?),
                DraftImages::List(payloads) => Value::from(staged.store_all(payloads).await?),
            };
            fields.insert(name.to_string(), value);
        }
        fields.insert("createdAt".to_string(), Value::from(Utc::now().timestamp()));

        self.repo.insert(fields).await?.ok_or_else(not_found)
    }

    async fn try_edit(&self, id: EntryId, updates: Map<String, Value>) -> AppResult<E> {
        let EntryPatch { fields, images } = EntryPatch::build::<E>(updates)?;
        let current = self.repo.find(id).await?.ok_or_else(not_found)?;
        self.ensure_unique(&fields, Some(id)).await?;

        let current = match serde_json::to_value(&current)? {
            Value::Object(map) => map,
            _ => return Err(AppError::internal("Entry did not serialize to an object")),
        };
        check_patch::<E>(&current, &fields)?;

        let mut staged = StagedImages::new(self.images.as_ref());
        let mut replaced = Vec::new();
        let result = self
            .apply(&mut staged, id, &current, fields, images, &mut replaced)
            .await;
        staged.finish(&result).await;

        let entry = result?;
        for url in &replaced {
            discard(self.images.as_ref(), url).await;
        }
        info!(
            collection = %E::COLLECTION,
            entry_id = %id,
            replaced_images = replaced.len(),
            "Entry updated"
        );
        Ok(entry)
    }

    /// Resolve image fields into URLs and write the patch. URLs the entry
    /// stops referencing are collected into `replaced`.
    async fn apply(
        &self,
        staged: &mut StagedImages<'_>,
        id: EntryId,
        current: &Map<String, Value>,
        mut fields: Map<String, Value>,
        images: Vec<(&'static ImageField, Value)>,
        replaced: &mut Vec<String>,
    ) -> AppResult<E> {
        for (field, value) in images {
            let invalid =
                |e: serde_json::Error| AppError::validation(format!("Invalid {}: {e}", field.name));
            let resolved = match field.kind {
                ImageFieldKind::Single => {
                    let input: ImageInput = serde_json::from_value(value).map_err(invalid)?;
                    Value::String(staged.resolve(input).await?)
                }
                ImageFieldKind::List => {
                    let inputs: Vec<ImageInput> = serde_json::from_value(value).map_err(invalid)?;
                    Value::from(staged.resolve_all(inputs).await?)
                }
            };
            fields.insert(field.name.to_string(), resolved);
        }

        // A URL may move between image fields, so compare across all of them.
        let mut before = Vec::new();
        let mut after = Vec::new();
        for field in E::COLLECTION.image_fields() {
            before.extend(urls_in(current.get(field.name)));
            after.extend(urls_in(fields.get(field.name).or_else(|| current.get(field.name))));
        }
        replaced.extend(orphaned(&before, &after));

        self.repo.update_fields(id, fields).await?.ok_or_else(not_found)
    }

    async fn ensure_unique(
        &self,
        fields: &Map<String, Value>,
        exclude: Option<EntryId>,
    ) -> AppResult<()> {
        for key in E::COLLECTION.unique_keys() {
            let Some(value) = fields.get(key.field).and_then(Value::as_str) else {
                continue;
            };
            if self.repo.key_exists(key.field, value, exclude).await? {
                debug!(collection = %E::COLLECTION, field = key.field, "Unique key already taken");
                return Err(key.duplicate_error());
            }
        }
        Ok(())
    }
}
