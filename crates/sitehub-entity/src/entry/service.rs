//! Offered service entries.

use serde::{Deserialize, Serialize};
use sitehub_core::types::EntryId;
use validator::Validate;

use super::{DraftParts, EntryDraft, SiteEntry};
use crate::collection::Collection;
use crate::image::ImagePayload;

/// A bilingual service description with an icon and a gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Entry identifier.
    #[serde(rename = "_id")]
    pub id: EntryId,
    /// English title (unique within the collection).
    #[validate(length(min = 1, max = 200))]
    pub english_title: String,
    /// English body text.
    pub english_content: String,
    /// German title (unique within the collection).
    #[validate(length(min = 1, max = 200))]
    pub german_title: String,
    /// German body text.
    pub german_content: String,
    /// Icon image URL.
    pub icon: String,
    /// Gallery image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Unix seconds at which the entry was added.
    #[serde(default)]
    pub created_at: i64,
}

/// Data required to add a service.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    #[validate(length(min = 1, max = 200))]
    pub english_title: String,
    pub english_content: String,
    #[validate(length(min = 1, max = 200))]
    pub german_title: String,
    pub german_content: String,
    #[validate(nested)]
    pub icon: ImagePayload,
    #[validate(nested)]
    pub images: Vec<ImagePayload>,
}

impl SiteEntry for Service {
    const COLLECTION: Collection = Collection::Services;
    const EDITABLE_FIELDS: &'static [&'static str] = &[
        "englishTitle",
        "englishContent",
        "germanTitle",
        "germanContent",
        "icon",
        "images",
    ];
    type Draft = NewService;

    fn id(&self) -> EntryId {
        self.id
    }

    fn image_urls(&self) -> Vec<String> {
        std::iter::once(self.icon.clone())
            .chain(self.images.iter().cloned())
            .collect()
    }
}

impl EntryDraft for NewService {
    fn into_parts(self) -> DraftParts {
        DraftParts::new()
            .field("englishTitle", self.english_title)
            .field("englishContent", self.english_content)
            .field("germanTitle", self.german_title)
            .field("germanContent", self.german_content)
            .image("icon", self.icon)
            .images("images", self.images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_urls_include_icon_first() {
        let service = Service {
            id: EntryId::new(),
            english_title: "Design".into(),
            english_content: String::new(),
            german_title: "Gestaltung".into(),
            german_content: String::new(),
            icon: "icon.svg".into(),
            images: vec!["a.png".into(), "b.png".into()],
            created_at: 0,
        };
        assert_eq!(service.image_urls(), vec!["icon.svg", "a.png", "b.png"]);
    }
}
