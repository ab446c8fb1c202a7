//! The singleton site-info document and its single-value fields.

pub mod snapshot;

pub use snapshot::SiteSnapshot;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::image::ImageInput;

/// Header fields of the site-info document, one per website.
///
/// Sub-collections are stored alongside but loaded separately; see
/// [`SiteSnapshot`] for the assembled view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    /// Key of the document.
    pub website_name: String,
    /// Logo image URL, once one has been set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Landing page banner titles.
    #[serde(default)]
    pub banner: Banner,
    /// Footer contact block.
    #[serde(default)]
    pub footer: Footer,
    /// "About us" section.
    #[serde(default)]
    pub about_us: AboutUs,
}

impl SiteInfo {
    /// An empty document for `website_name`.
    pub fn empty(website_name: impl Into<String>) -> Self {
        Self {
            website_name: website_name.into(),
            ..Self::default()
        }
    }
}

/// English/German banner title pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(default)]
    pub english_title: String,
    #[serde(default)]
    pub german_title: String,
}

/// Partial banner update; absent fields keep their value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BannerUpdate {
    #[validate(length(max = 300))]
    pub english_title: Option<String>,
    #[validate(length(max = 300))]
    pub german_title: Option<String>,
}

impl BannerUpdate {
    /// Whether the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.english_title.is_none() && self.german_title.is_none()
    }
}

/// Footer contact block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub english_address: String,
    #[serde(default)]
    pub german_address: String,
    #[serde(default)]
    pub english_content: String,
    #[serde(default)]
    pub german_content: String,
    /// Footer image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Partial footer update. `images` may mix kept URLs and new payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FooterUpdate {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    pub english_address: Option<String>,
    pub german_address: Option<String>,
    pub english_content: Option<String>,
    pub german_content: Option<String>,
    pub images: Option<Vec<ImageInput>>,
}

impl FooterUpdate {
    /// Whether the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.phone.is_none()
            && self.english_address.is_none()
            && self.german_address.is_none()
            && self.english_content.is_none()
            && self.german_content.is_none()
            && self.images.is_none()
    }
}

/// "About us" section: bilingual text next to a picture gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutUs {
    /// Gallery image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub english_title: String,
    #[serde(default)]
    pub english_content: String,
    #[serde(default)]
    pub german_title: String,
    #[serde(default)]
    pub german_content: String,
}

/// Partial "about us" update. `images` may mix kept URLs and new payloads.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AboutUsUpdate {
    pub images: Option<Vec<ImageInput>>,
    #[validate(length(max = 200))]
    pub english_title: Option<String>,
    pub english_content: Option<String>,
    #[validate(length(max = 200))]
    pub german_title: Option<String>,
    pub german_content: Option<String>,
}

impl AboutUsUpdate {
    /// Whether the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        self.images.is_none()
            && self.english_title.is_none()
            && self.english_content.is_none()
            && self.german_title.is_none()
            && self.german_content.is_none()
    }
}
