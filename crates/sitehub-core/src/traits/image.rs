//! Image store trait consumed by the site-info service.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Persists image payloads and hands back their public URLs.
///
/// Documents only ever hold the URLs returned from [`ImageStore::store_image`].
#[async_trait]
pub trait ImageStore: Send + Sync + 'static {
    /// Store `data` as an image of the given format and return its URL.
    async fn store_image(&self, format: &str, data: Bytes) -> AppResult<String>;

    /// Delete the image behind `url`. Unknown URLs are ignored.
    async fn delete_image(&self, url: &str) -> AppResult<()>;

    /// Overwrite the image behind `url` with new content.
    async fn update_image(&self, url: &str, format: &str, data: Bytes) -> AppResult<()>;
}
