//! PostgreSQL document store.
//!
//! Header fields live in `site_info.fields`, entries in `site_info_entries`
//! as JSONB bodies ordered by an identity column. Unique keys are mirrored
//! into `site_info_entry_keys`, whose unique constraint is the authoritative
//! duplicate check; every write that touches keys runs in one transaction.

use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::debug;

use sitehub_core::error::{AppError, ErrorKind};
use sitehub_core::result::AppResult;
use sitehub_core::types::EntryId;
use sitehub_entity::{Collection, SiteInfo};

use super::{SiteInfoStore, StoredEntry, site_info_from_fields, unique_values};
use crate::connection::DatabasePool;

/// Document store backed by PostgreSQL JSONB columns.
#[derive(Debug, Clone)]
pub struct PgSiteInfoStore {
    pool: PgPool,
}

impl PgSiteInfoStore {
    /// Create a store over an open pool.
    pub fn new(db: &DatabasePool) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
            })
    }

    /// Claim the unique values in `fields` for `entry_id`, replacing any
    /// previous claim on the same field.
    async fn claim_keys(
        tx: &mut Transaction<'static, Postgres>,
        website: &str,
        collection: Collection,
        entry_id: &str,
        fields: &Map<String, Value>,
    ) -> AppResult<()> {
        for (key, value) in unique_values(collection, fields) {
            sqlx::query("DELETE FROM site_info_entry_keys WHERE entry_id = $1 AND field = $2")
                .bind(entry_id)
                .bind(key.field)
                .execute(&mut **tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to release entry key", e)
                })?;

            let claimed: Option<String> = sqlx::query_scalar(
                "INSERT INTO site_info_entry_keys \
                 (entry_id, website_name, collection, field, value) \
                 VALUES ($1, $2, $3, $4, $5) \
                 ON CONFLICT (website_name, collection, field, value) DO NOTHING \
                 RETURNING entry_id",
            )
            .bind(entry_id)
            .bind(website)
            .bind(collection.field_name())
            .bind(key.field)
            .bind(value)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to claim entry key", e)
            })?;

            if claimed.is_none() {
                debug!(collection = %collection, field = key.field, "Unique key already taken");
                return Err(key.duplicate_error());
            }
        }
        Ok(())
    }

    async fn commit(tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.commit()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
            })
    }
}

fn into_object(value: Value) -> AppResult<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(AppError::database(format!(
            "Stored JSON is not an object: {other}"
        ))),
    }
}

fn decode_entry((id, body): (String, Value)) -> AppResult<StoredEntry> {
    let id = id.parse::<EntryId>().map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Stored entry has a malformed id", e)
    })?;
    Ok(StoredEntry {
        id,
        fields: into_object(body)?,
    })
}

#[async_trait]
impl SiteInfoStore for PgSiteInfoStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    async fn ensure_document(&self, website: &str) -> AppResult<SiteInfo> {
        sqlx::query(
            "INSERT INTO site_info (website_name) VALUES ($1) \
             ON CONFLICT (website_name) DO NOTHING",
        )
        .bind(website)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create site-info document", e)
        })?;

        self.find_document(website)
            .await?
            .ok_or_else(|| AppError::database("Site-info document vanished after creation"))
    }

    async fn find_document(&self, website: &str) -> AppResult<Option<SiteInfo>> {
        let fields: Option<Value> =
            sqlx::query_scalar("SELECT fields FROM site_info WHERE website_name = $1")
                .bind(website)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    let message = "Failed to find site-info document";
                    AppError::with_source(ErrorKind::Database, message, e)
                })?;

        fields
            .map(|f| site_info_from_fields(website, into_object(f)?))
            .transpose()
    }

    async fn set_document_fields(
        &self,
        website: &str,
        patch: Map<String, Value>,
    ) -> AppResult<Option<SiteInfo>> {
        let fields: Option<Value> = sqlx::query_scalar(
            "UPDATE site_info SET fields = fields || $2, updated_at = NOW() \
             WHERE website_name = $1 RETURNING fields",
        )
        .bind(website)
        .bind(Value::Object(patch))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update site-info document", e)
        })?;

        fields
            .map(|f| site_info_from_fields(website, into_object(f)?))
            .transpose()
    }

    async fn key_exists(
        &self,
        website: &str,
        collection: Collection,
        field: &str,
        value: &str,
        exclude: Option<EntryId>,
    ) -> AppResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM site_info_entry_keys \
             WHERE website_name = $1 AND collection = $2 AND field = $3 AND value = $4 \
             AND ($5::TEXT IS NULL OR entry_id <> $5))",
        )
        .bind(website)
        .bind(collection.field_name())
        .bind(field)
        .bind(value)
        .bind(exclude.map(|id| id.to_string()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check entry key", e))
    }

    async fn push_entry(
        &self,
        website: &str,
        collection: Collection,
        fields: Map<String, Value>,
    ) -> AppResult<Option<StoredEntry>> {
        let mut tx = self.begin().await?;

        let exists: Option<String> = sqlx::query_scalar(
            "SELECT website_name FROM site_info WHERE website_name = $1 FOR SHARE",
        )
        .bind(website)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to lock site-info document", e)
        })?;
        if exists.is_none() {
            return Ok(None);
        }

        let id = EntryId::new();
        let id_text = id.to_string();
        sqlx::query(
            "INSERT INTO site_info_entries (id, website_name, collection, body) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&id_text)
        .bind(website)
        .bind(collection.field_name())
        .bind(Value::Object(fields.clone()))
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert entry", e))?;

        Self::claim_keys(&mut tx, website, collection, &id_text, &fields).await?;
        Self::commit(tx).await?;

        debug!(collection = %collection, entry_id = %id, "Entry appended");
        Ok(Some(StoredEntry { id, fields }))
    }

    async fn find_entry(
        &self,
        website: &str,
        collection: Collection,
        id: EntryId,
    ) -> AppResult<Option<StoredEntry>> {
        let row: Option<(String, Value)> = sqlx::query_as(
            "SELECT id, body FROM site_info_entries \
             WHERE website_name = $1 AND collection = $2 AND id = $3",
        )
        .bind(website)
        .bind(collection.field_name())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find entry", e))?;

        row.map(decode_entry).transpose()
    }

    async fn list_entries(
        &self,
        website: &str,
        collection: Collection,
    ) -> AppResult<Vec<StoredEntry>> {
        let rows: Vec<(String, Value)> = sqlx::query_as(
            "SELECT id, body FROM site_info_entries \
             WHERE website_name = $1 AND collection = $2 ORDER BY position",
        )
        .bind(website)
        .bind(collection.field_name())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list entries", e))?;

        rows.into_iter().map(decode_entry).collect()
    }

    async fn update_entry_fields(
        &self,
        website: &str,
        collection: Collection,
        id: EntryId,
        patch: Map<String, Value>,
    ) -> AppResult<Option<StoredEntry>> {
        let mut tx = self.begin().await?;
        let id_text = id.to_string();

        let row: Option<(String, Value)> = sqlx::query_as(
            "UPDATE site_info_entries SET body = body || $4 \
             WHERE website_name = $1 AND collection = $2 AND id = $3 \
             RETURNING id, body",
        )
        .bind(website)
        .bind(collection.field_name())
        .bind(&id_text)
        .bind(Value::Object(patch.clone()))
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update entry", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        Self::claim_keys(&mut tx, website, collection, &id_text, &patch).await?;
        Self::commit(tx).await?;

        decode_entry(row).map(Some)
    }

    async fn pull_entry(
        &self,
        website: &str,
        collection: Collection,
        id: EntryId,
    ) -> AppResult<Option<StoredEntry>> {
        let row: Option<(String, Value)> = sqlx::query_as(
            "DELETE FROM site_info_entries \
             WHERE website_name = $1 AND collection = $2 AND id = $3 \
             RETURNING id, body",
        )
        .bind(website)
        .bind(collection.field_name())
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete entry", e))?;

        row.map(decode_entry).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_entry() {
        let id = EntryId::new();
        let entry = decode_entry((id.to_string(), json!({"englishTitle": "A"}))).expect("decode");
        assert_eq!(entry.id, id);
        assert_eq!(entry.fields["englishTitle"], "A");
    }

    #[test]
    fn test_decode_entry_rejects_bad_rows() {
        let err = decode_entry(("nope".into(), json!({}))).expect_err("bad id");
        assert_eq!(err.kind, ErrorKind::Database);
        let err = decode_entry((EntryId::new().to_string(), json!([1, 2]))).expect_err("bad body");
        assert_eq!(err.kind, ErrorKind::Database);
    }
}
