//! Image side effects of content writes.

use serde_json::Value;
use tracing::{error, warn};

use sitehub_core::error::{AppError, ErrorKind};
use sitehub_core::result::AppResult;
use sitehub_core::traits::image::ImageStore;
use sitehub_entity::{ImageInput, ImagePayload};

const IMAGE_FAILURE_MESSAGE: &str = "There was a problem processing the image";

/// Images stored while preparing a single write.
///
/// When the write fails, [`StagedImages::finish`] deletes them again so a
/// rejected request leaves no orphaned files behind.
pub(crate) struct StagedImages<'a> {
    images: &'a dyn ImageStore,
    stored: Vec<String>,
}

impl<'a> StagedImages<'a> {
    pub(crate) fn new(images: &'a dyn ImageStore) -> Self {
        Self {
            images,
            stored: Vec::new(),
        }
    }

    /// Store one payload and remember its URL.
    pub(crate) async fn store(&mut self, payload: ImagePayload) -> AppResult<String> {
        let url = self
            .images
            .store_image(&payload.format, payload.data)
            .await
            .map_err(image_failure)?;
        self.stored.push(url.clone());
        Ok(url)
    }

    /// Store payloads in order.
    pub(crate) async fn store_all(
        &mut self,
        payloads: Vec<ImagePayload>,
    ) -> AppResult<Vec<String>> {
        let mut urls = Vec::with_capacity(payloads.len());
        for payload in payloads {
            urls.push(self.store(payload).await?);
        }
        Ok(urls)
    }

    /// Keep a URL as is or store a payload in its place.
    pub(crate) async fn resolve(&mut self, input: ImageInput) -> AppResult<String> {
        match input {
            ImageInput::Url(url) => Ok(url),
            ImageInput::Payload(payload) => self.store(payload).await,
        }
    }

    /// Resolve a mixed list, keeping input order.
    pub(crate) async fn resolve_all(&mut self, inputs: Vec<ImageInput>) -> AppResult<Vec<String>> {
        let mut urls = Vec::with_capacity(inputs.len());
        for input in inputs {
            urls.push(self.resolve(input).await?);
        }
        Ok(urls)
    }

    /// Settle the staged images against the outcome of the write.
    pub(crate) async fn finish<T>(self, result: &AppResult<T>) {
        if result.is_ok() {
            return;
        }
        for url in &self.stored {
            discard(self.images, url).await;
        }
    }
}

/// Map an image store failure to the error callers see. Rejections keep
/// their message; storage faults are logged and reported generically.
fn image_failure(err: AppError) -> AppError {
    if err.kind == ErrorKind::ImageStorage {
        warn!(error = %err, "Image rejected");
        err
    } else {
        error!(kind = %err.kind, error = %err, "Image store failed");
        AppError::image_storage(IMAGE_FAILURE_MESSAGE)
    }
}

/// Delete an image, logging instead of failing.
pub(crate) async fn discard(images: &dyn ImageStore, url: &str) {
    if let Err(err) = images.delete_image(url).await {
        warn!(url, error = %err, "Failed to delete image");
    }
}

/// Image URLs held by a stored field value, a single URL or a list.
pub(crate) fn urls_in(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(url)) if !url.is_empty() => vec![url.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// URLs of `previous` no longer referenced by `current`.
pub(crate) fn orphaned(previous: &[String], current: &[String]) -> Vec<String> {
    previous
        .iter()
        .filter(|url| !current.contains(url))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_urls_in_single_and_list() {
        assert_eq!(urls_in(Some(&json!("a.png"))), vec!["a.png"]);
        assert_eq!(urls_in(Some(&json!(["a.png", "", "b.png"]))), vec!["a.png", "b.png"]);
        assert!(urls_in(Some(&json!(""))).is_empty());
        assert!(urls_in(None).is_empty());
    }

    #[test]
    fn test_orphaned_keeps_only_dropped_urls() {
        let previous = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let current = vec!["c".to_string(), "d".to_string(), "a".to_string()];
        assert_eq!(orphaned(&previous, &current), vec!["b"]);
    }

    #[test]
    fn test_image_failure_masks_storage_faults() {
        let rejected = image_failure(AppError::image_storage("Image data is empty"));
        assert_eq!(rejected.message, "Image data is empty");
        let fault = image_failure(AppError::storage("disk full"));
        assert_eq!(fault.kind, ErrorKind::ImageStorage);
        assert_eq!(fault.message, IMAGE_FAILURE_MESSAGE);
    }
}
