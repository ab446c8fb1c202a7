//! Single-value fields of the site-info document: logo, banner, footer and
//! the "about us" section.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;
use validator::Validate;

use sitehub_core::error::AppError;
use sitehub_core::result::AppResult;
use sitehub_core::traits::image::ImageStore;
use sitehub_database::repositories::SiteInfoRepository;
use sitehub_entity::{
    AboutUs, AboutUsUpdate, Banner, BannerUpdate, Footer, FooterUpdate, ImagePayload, SiteInfo,
};

use crate::failure::{not_found, surface};
use crate::images::{StagedImages, discard, orphaned};

/// Reads and writes the header fields of one website's document.
#[derive(Clone)]
pub struct HeaderService {
    repo: SiteInfoRepository,
    images: Arc<dyn ImageStore>,
}

impl HeaderService {
    /// Creates a new header service.
    pub fn new(repo: SiteInfoRepository, images: Arc<dyn ImageStore>) -> Self {
        Self { repo, images }
    }

    /// The whole header document.
    pub async fn document(&self) -> AppResult<SiteInfo> {
        self.load().await.map_err(|e| surface(e, "siteInfo.get"))
    }

    /// Store a new logo and point the document at it. The previous logo is
    /// deleted once the new URL is saved.
    pub async fn set_logo(&self, payload: ImagePayload) -> AppResult<String> {
        self.try_set_logo(payload)
            .await
            .map_err(|e| surface(e, "logo.set"))
    }

    /// The current logo URL.
    pub async fn logo(&self) -> AppResult<String> {
        self.load()
            .await
            .and_then(|doc| doc.logo.ok_or_else(not_found))
            .map_err(|e| surface(e, "logo.get"))
    }

    pub async fn banner(&self) -> AppResult<Banner> {
        self.load()
            .await
            .map(|doc| doc.banner)
            .map_err(|e| surface(e, "banner.get"))
    }

    /// Merge `update` into the banner.
    pub async fn update_banner(&self, update: BannerUpdate) -> AppResult<Banner> {
        self.try_update_banner(update)
            .await
            .map_err(|e| surface(e, "banner.update"))
    }

    pub async fn footer(&self) -> AppResult<Footer> {
        self.load()
            .await
            .map(|doc| doc.footer)
            .map_err(|e| surface(e, "footer.get"))
    }

    /// Merge `update` into the footer. The image list may mix kept URLs
    /// and new payloads; dropped images are deleted after the write.
    pub async fn update_footer(&self, update: FooterUpdate) -> AppResult<Footer> {
        self.try_update_footer(update)
            .await
            .map_err(|e| surface(e, "footer.update"))
    }

    pub async fn about_us(&self) -> AppResult<AboutUs> {
        self.load()
            .await
            .map(|doc| doc.about_us)
            .map_err(|e| surface(e, "aboutUs.get"))
    }

    /// Merge `update` into the "about us" section. Gallery images follow
    /// the footer rules.
    pub async fn update_about_us(&self, update: AboutUsUpdate) -> AppResult<AboutUs> {
        self.try_update_about_us(update)
            .await
            .map_err(|e| surface(e, "aboutUs.update"))
    }

    async fn load(&self) -> AppResult<SiteInfo> {
        self.repo.find().await?.ok_or_else(not_found)
    }

    async fn try_set_logo(&self, payload: ImagePayload) -> AppResult<String> {
        payload
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;
        let previous = self.load().await?.logo;

        let mut staged = StagedImages::new(self.images.as_ref());
        let result = async {
            let url = staged.store(payload).await?;
            self.repo
                .set_field("logo", Value::String(url.clone()))
                .await?
                .ok_or_else(not_found)?;
            Ok::<_, AppError>(url)
        }
        .await;
        staged.finish(&result).await;

        let url = result?;
        if let Some(previous) = previous.filter(|p| *p != url) {
            discard(self.images.as_ref(), &previous).await;
        }
        info!(url = %url, "Logo updated");
        Ok(url)
    }

    async fn try_update_banner(&self, update: BannerUpdate) -> AppResult<Banner> {
        if update.is_empty() {
            return Err(AppError::no_changes());
        }
        update
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let mut banner = self.load().await?.banner;
        if let Some(title) = update.english_title {
            banner.english_title = title.trim().to_string();
        }
        if let Some(title) = update.german_title {
            banner.german_title = title.trim().to_string();
        }

        let saved = self
            .repo
            .set_field("banner", serde_json::to_value(&banner)?)
            .await?
            .ok_or_else(not_found)?;
        info!("Banner updated");
        Ok(saved.banner)
    }

    async fn try_update_footer(&self, update: FooterUpdate) -> AppResult<Footer> {
        if update.is_empty() {
            return Err(AppError::no_changes());
        }
        update
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let mut footer = self.load().await?.footer;
        let previous_images = footer.images.clone();
        let FooterUpdate {
            email,
            phone,
            english_address,
            german_address,
            english_content,
            german_content,
            images,
        } = update;
        for (slot, value) in [
            (&mut footer.email, email),
            (&mut footer.phone, phone),
            (&mut footer.english_address, english_address),
            (&mut footer.german_address, german_address),
            (&mut footer.english_content, english_content),
            (&mut footer.german_content, german_content),
        ] {
            if let Some(value) = value {
                *slot = value.trim().to_string();
            }
        }

        let mut staged = StagedImages::new(self.images.as_ref());
        let result = async {
            if let Some(inputs) = images {
                footer.images = staged.resolve_all(inputs).await?;
            }
            let saved = self
                .repo
                .set_field("footer", serde_json::to_value(&footer)?)
                .await?
                .ok_or_else(not_found)?;
            Ok::<_, AppError>(saved.footer)
        }
        .await;
        staged.finish(&result).await;

        let saved = result?;
        for url in orphaned(&previous_images, &saved.images) {
            discard(self.images.as_ref(), &url).await;
        }
        info!(images = saved.images.len(), "Footer updated");
        Ok(saved)
    }

    async fn try_update_about_us(&self, update: AboutUsUpdate) -> AppResult<AboutUs> {
        if update.is_empty() {
            return Err(AppError::no_changes());
        }
        update
            .validate()
            .map_err(|e| AppError::validation(e.to_string()))?;

        let mut about = self.load().await?.about_us;
        let previous_images = about.images.clone();
        let AboutUsUpdate {
            images,
            english_title,
            english_content,
            german_title,
            german_content,
        } = update;
        for (slot, value) in [
            (&mut about.english_title, english_title),
            (&mut about.english_content, english_content),
            (&mut about.german_title, german_title),
            (&mut about.german_content, german_content),
        ] {
            if let Some(value) = value {
                *slot = value.trim().to_string();
            }
        }

        let mut staged = StagedImages::new(self.images.as_ref());
        let result = async {
            if let Some(inputs) = images {
                about.images = staged.resolve_all(inputs).await?;
            }
            let saved = self
                .repo
                .set_field("aboutUs", serde_json::to_value(&about)?)
                .await?
                .ok_or_else(not_found)?;
            Ok::<_, AppError>(saved.about_us)
        }
        .await;
        staged.finish(&result).await;

        let saved = result?;
        for url in orphaned(&previous_images, &saved.images) {
            discard(self.images.as_ref(), &url).await;
        }
        info!(images = saved.images.len(), "About us updated");
        Ok(saved)
    }
}
