//! URL-addressed image store over a storage provider.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, info};

use sitehub_core::config::storage::StorageConfig;
use sitehub_core::error::AppError;
use sitehub_core::result::AppResult;
use sitehub_core::traits::image::ImageStore;
use sitehub_core::traits::storage::StorageProvider;
use sitehub_core::types::ImageId;

use super::format::ImageKind;

/// Route prefix under which stored images are served.
pub const IMAGE_ROUTE: &str = "images";

/// Stores validated images as `<images_dir>/<ImageId>.<ext>` and hands out
/// `<public_base_url>/images/<file>` URLs.
#[derive(Debug, Clone)]
pub struct ImageService {
    provider: Arc<dyn StorageProvider>,
    images_dir: String,
    url_prefix: String,
    max_size_bytes: u64,
    allowed_formats: Vec<String>,
}

impl ImageService {
    /// Create an image service writing through `provider`.
    pub fn new(provider: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        Self {
            provider,
            images_dir: config.images_dir.trim_matches('/').to_string(),
            url_prefix: format!(
                "{}/{IMAGE_ROUTE}/",
                config.public_base_url.trim_end_matches('/')
            ),
            max_size_bytes: config.max_image_size_bytes,
            allowed_formats: config
                .allowed_formats
                .iter()
                .map(|f| f.to_ascii_lowercase())
                .collect(),
        }
    }

    /// Public URL of a stored file.
    pub fn url_for(&self, file_name: &str) -> String {
        format!("{}{file_name}", self.url_prefix)
    }

    /// The stored file name behind `url`, when the URL was issued by this
    /// service and names a well-formed image file.
    pub fn file_name_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let file = url.strip_prefix(&self.url_prefix)?;
        parse_file_name(file).map(|_| file)
    }

    /// Read a stored image for serving. Returns the bytes and their MIME type.
    pub async fn read_image(&self, file_name: &str) -> AppResult<(Bytes, &'static str)> {
        let kind = parse_file_name(file_name)
            .ok_or_else(|| AppError::not_found(format!("Image not found: {file_name}")))?;
        let data = self.provider.read_bytes(&self.storage_path(file_name)).await?;
        Ok((data, kind.mime_type()))
    }

    fn storage_path(&self, file_name: &str) -> String {
        if self.images_dir.is_empty() {
            file_name.to_string()
        } else {
            format!("{}/{file_name}", self.images_dir)
        }
    }

    /// Check format and content of a payload before it touches storage.
    fn validate(&self, format: &str, data: &[u8]) -> AppResult<ImageKind> {
        let format = format.to_ascii_lowercase();
        if !self.allowed_formats.contains(&format) {
            return Err(AppError::image_storage(format!(
                "Image format '{format}' is not allowed"
            )));
        }
        let kind = ImageKind::from_format(&format).ok_or_else(|| {
            AppError::image_storage(format!("Image format '{format}' is not supported"))
        })?;
        if data.is_empty() {
            return Err(AppError::image_storage("Image data is empty"));
        }
        if data.len() as u64 > self.max_size_bytes {
            return Err(AppError::image_storage(format!(
                "Image exceeds the maximum size of {} bytes",
                self.max_size_bytes
            )));
        }
        if !kind.matches(data) {
            return Err(AppError::image_storage(format!(
                "Image content does not match the declared format '{format}'"
            )));
        }
        Ok(kind)
    }
}

/// Parse `<ImageId>.<ext>`; anything else is not one of our files.
fn parse_file_name(file_name: &str) -> Option<ImageKind> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    stem.parse::<ImageId>().ok()?;
    ImageKind::from_format(ext)
}

#[async_trait]
impl ImageStore for ImageService {
    async fn store_image(&self, format: &str, data: Bytes) -> AppResult<String> {
        self.validate(format, &data)?;

        let file_name = format!("{}.{}", ImageId::new(), format.to_ascii_lowercase());
        self.provider
            .write(&self.storage_path(&file_name), data.clone())
            .await?;

        info!(file = %file_name, bytes = data.len(), "Stored image");
        Ok(self.url_for(&file_name))
    }

    async fn delete_image(&self, url: &str) -> AppResult<()> {
        let Some(file_name) = self.file_name_from_url(url) else {
            debug!(url, "Ignoring delete of foreign image URL");
            return Ok(());
        };
        self.provider.delete(&self.storage_path(file_name)).await?;
        info!(file = %file_name, "Deleted image");
        Ok(())
    }

    async fn update_image(&self, url: &str, format: &str, data: Bytes) -> AppResult<()> {
        let file_name = self
            .file_name_from_url(url)
            .ok_or_else(|| AppError::not_found(format!("Image not found: {url}")))?;
        let existing = parse_file_name(file_name)
            .ok_or_else(|| AppError::not_found(format!("Image not found: {url}")))?;

        let kind = self.validate(format, &data)?;
        if kind != existing {
            return Err(AppError::image_storage(format!(
                "Cannot replace a {} image with a {} image in place",
                existing.mime_type(),
                kind.mime_type()
            )));
        }

        let path = self.storage_path(file_name);
        if !self.provider.exists(&path).await? {
            return Err(AppError::not_found(format!("Image not found: {url}")));
        }
        self.provider.write(&path, data).await?;
        info!(file = %file_name, "Replaced image");
        Ok(())
    }
}
