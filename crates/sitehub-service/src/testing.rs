//! Shared fixtures for the service tests.

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Map, Value};
use tempfile::TempDir;

use sitehub_core::config::storage::StorageConfig;
use sitehub_core::error::AppError;
use sitehub_core::result::AppResult;
use sitehub_core::traits::storage::StorageProvider;
use sitehub_core::types::EntryId;
use sitehub_database::repositories::{CollectionRepository, SiteInfoRepository};
use sitehub_database::{MemorySiteInfoStore, SiteInfoStore, StoredEntry};
use sitehub_entity::{Collection, ImagePayload, SiteEntry, SiteInfo};
use sitehub_storage::{ImageService, LocalStorageProvider};

use crate::{EntryService, HeaderService, SiteInfoService};

pub(crate) const WEBSITE: &str = "landing-page";
pub(crate) const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
pub(crate) const SVG: &[u8] = b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>";

pub(crate) fn png() -> ImagePayload {
    ImagePayload::new("png", PNG)
}

pub(crate) fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

pub(crate) struct Fixture {
    _dir: TempDir,
    store: Arc<dyn SiteInfoStore>,
    images: Arc<ImageService>,
    provider: Arc<LocalStorageProvider>,
}

impl Fixture {
    /// Memory store with the document seeded.
    pub(crate) async fn new() -> Self {
        let fx = Self::unseeded().await;
        fx.store.ensure_document(WEBSITE).await.expect("seed document");
        fx
    }

    /// Memory store without a document.
    pub(crate) async fn unseeded() -> Self {
        Self::with_store(Arc::new(MemorySiteInfoStore::new())).await
    }

    /// A store whose every call fails.
    pub(crate) async fn with_broken_store() -> Self {
        Self::with_store(Arc::new(BrokenStore)).await
    }

    async fn with_store(store: Arc<dyn SiteInfoStore>) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let provider = Arc::new(LocalStorageProvider::new(dir.path()).await.expect("provider"));
        let images = Arc::new(ImageService::new(provider.clone(), &StorageConfig::default()));
        Self {
            _dir: dir,
            store,
            images,
            provider,
        }
    }

    pub(crate) fn entries<E: SiteEntry>(&self) -> EntryService<E> {
        EntryService::new(
            CollectionRepository::new(self.store.clone(), WEBSITE),
            self.images.clone(),
        )
    }

    pub(crate) fn header(&self) -> HeaderService {
        HeaderService::new(
            SiteInfoRepository::new(self.store.clone(), WEBSITE),
            self.images.clone(),
        )
    }

    pub(crate) fn site(&self) -> SiteInfoService {
        SiteInfoService::new(self.store.clone(), self.images.clone(), WEBSITE)
    }

    pub(crate) fn base64(&self, data: &[u8]) -> String {
        BASE64.encode(data)
    }

    pub(crate) async fn image_exists(&self, url: &str) -> bool {
        let Some(file) = self.images.file_name_from_url(url) else {
            return false;
        };
        self.provider
            .exists(&format!("images/{file}"))
            .await
            .expect("exists")
    }

    /// Number of image files currently on disk.
    pub(crate) async fn stored_images(&self) -> usize {
        let dir = self.provider.root().join("images");
        match std::fs::read_dir(dir) {
            Ok(entries) => entries.filter_map(Result::ok).count(),
            Err(_) => 0,
        }
    }
}

struct BrokenStore;

fn down<T>() -> AppResult<T> {
    Err(AppError::database("connection refused"))
}

#[async_trait]
impl SiteInfoStore for BrokenStore {
    fn backend(&self) -> &'static str {
        "broken"
    }

    async fn health_check(&self) -> AppResult<bool> {
        down()
    }

    async fn ensure_document(&self, _: &str) -> AppResult<SiteInfo> {
        down()
    }

    async fn find_document(&self, _: &str) -> AppResult<Option<SiteInfo>> {
        down()
    }

    async fn set_document_fields(
        &self,
        _: &str,
        _: Map<String, Value>,
    ) -> AppResult<Option<SiteInfo>> {
        down()
    }

    async fn key_exists(
        &self,
        _: &str,
        _: Collection,
        _: &str,
        _: &str,
        _: Option<EntryId>,
    ) -> AppResult<bool> {
        down()
    }

    async fn push_entry(
        &self,
        _: &str,
        _: Collection,
        _: Map<String, Value>,
    ) -> AppResult<Option<StoredEntry>> {
        down()
    }

    async fn find_entry(
        &self,
        _: &str,
        _: Collection,
        _: EntryId,
    ) -> AppResult<Option<StoredEntry>> {
        down()
    }

    async fn list_entries(&self, _: &str, _: Collection) -> AppResult<Vec<StoredEntry>> {
        down()
    }

    async fn update_entry_fields(
        &self,
        _: &str,
        _: Collection,
        _: EntryId,
        _: Map<String, Value>,
    ) -> AppResult<Option<StoredEntry>> {
        down()
    }

    async fn pull_entry(
        &self,
        _: &str,
        _: Collection,
        _: EntryId,
    ) -> AppResult<Option<StoredEntry>> {
        down()
    }
}
