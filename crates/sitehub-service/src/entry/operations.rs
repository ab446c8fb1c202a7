//! Collection operations over JSON, for callers that pick the collection
//! at runtime.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};

use sitehub_core::error::AppError;
use sitehub_core::result::AppResult;
use sitehub_core::types::EntryId;
use sitehub_entity::{Collection, SiteEntry};

use super::EntryService;
use crate::failure::not_found;

/// Object-safe view of an [`EntryService`].
///
/// Inputs and outputs are JSON. Outputs are keyed the way clients expect:
/// a single entry under the collection's singular name (`advantage`), a
/// listing under the collection name (`advantages`) next to `count`.
#[async_trait]
pub trait CollectionOperations: Send + Sync {
    /// The collection served.
    fn collection(&self) -> Collection;

    /// Decode a draft and add it.
    async fn add_json(&self, draft: Value) -> AppResult<Value>;

    /// Load one entry.
    async fn get_json(&self, id: &str) -> AppResult<Value>;

    /// Load every entry.
    async fn list_json(&self) -> AppResult<Value>;

    /// Apply a partial update.
    async fn edit_json(&self, id: &str, updates: Map<String, Value>) -> AppResult<Value>;

    /// Remove an entry. The output is empty.
    async fn delete_json(&self, id: &str) -> AppResult<Value>;
}

#[async_trait]
impl<E: SiteEntry> CollectionOperations for EntryService<E> {
    fn collection(&self) -> Collection {
        E::COLLECTION
    }

    async fn add_json(&self, draft: Value) -> AppResult<Value> {
        let draft: E::Draft = serde_json::from_value(draft).map_err(|e| {
            AppError::validation(format!("Invalid {}: {e}", E::COLLECTION.singular()))
        })?;
        let entry = self.add(draft).await?;
        keyed(E::COLLECTION.singular(), &entry)
    }

    async fn get_json(&self, id: &str) -> AppResult<Value> {
        let entry = self.get(parse_id(id)?).await?;
        keyed(E::COLLECTION.singular(), &entry)
    }

    async fn list_json(&self) -> AppResult<Value> {
        let list = self.get_all().await?;
        let mut outputs = Map::new();
        outputs.insert(
            E::COLLECTION.field_name().to_string(),
            serde_json::to_value(&list.items)?,
        );
        outputs.insert("count".to_string(), Value::from(list.count));
        Ok(Value::Object(outputs))
    }

    async fn edit_json(&self, id: &str, updates: Map<String, Value>) -> AppResult<Value> {
        let entry = self.edit(parse_id(id)?, updates).await?;
        keyed(E::COLLECTION.singular(), &entry)
    }

    async fn delete_json(&self, id: &str) -> AppResult<Value> {
        // A malformed id cannot name a stored entry, so it deletes nothing.
        if let Ok(id) = id.parse::<EntryId>() {
            self.delete(id).await?;
        }
        Ok(Value::Object(Map::new()))
    }
}

/// A malformed id cannot match any entry.
fn parse_id(id: &str) -> AppResult<EntryId> {
    id.parse().map_err(|_| not_found())
}

pub(crate) fn keyed(key: &str, value: &impl Serialize) -> AppResult<Value> {
    let mut outputs = Map::new();
    outputs.insert(key.to_string(), serde_json::to_value(value)?);
    Ok(Value::Object(outputs))
}
