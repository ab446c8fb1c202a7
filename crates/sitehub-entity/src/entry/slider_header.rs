//! Landing page slider headers.

use serde::{Deserialize, Serialize};
use sitehub_core::types::EntryId;
use validator::Validate;

use super::{DraftParts, EntryDraft, SiteEntry};
use crate::collection::Collection;
use crate::image::ImagePayload;

/// One slide of the landing page header carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SliderHeader {
    #[serde(rename = "_id")]
    pub id: EntryId,
    #[validate(length(min = 1, max = 200))]
    pub english_title: String,
    pub english_subheader: String,
    pub english_content: String,
    #[validate(length(min = 1, max = 200))]
    pub german_title: String,
    pub german_subheader: String,
    pub german_content: String,
    /// Slide image URL.
    pub icon: String,
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSliderHeader {
    #[validate(length(min = 1, max = 200))]
    pub english_title: String,
    #[serde(default)]
    pub english_subheader: String,
    pub english_content: String,
    #[validate(length(min = 1, max = 200))]
    pub german_title: String,
    #[serde(default)]
    pub german_subheader: String,
    pub german_content: String,
    #[validate(nested)]
    pub icon: ImagePayload,
}

impl SiteEntry for SliderHeader {
    const COLLECTION: Collection = Collection::SliderHeaders;
    const EDITABLE_FIELDS: &'static [&'static str] = &[
        "englishTitle",
        "englishSubheader",
        "englishContent",
        "germanTitle",
        "germanSubheader",
        "germanContent",
        "icon",
    ];
    type Draft = NewSliderHeader;

    fn id(&self) -> EntryId {
        self.id
    }

    fn image_urls(&self) -> Vec<String> {
        vec![self.icon.clone()]
    }
}

impl EntryDraft for NewSliderHeader {
    fn into_parts(self) -> DraftParts {
        DraftParts::new()
            .field("englishTitle", self.english_title)
            .field("englishSubheader", self.english_subheader)
            .field("englishContent", self.english_content)
            .field("germanTitle", self.german_title)
            .field("germanSubheader", self.german_subheader)
            .field("germanContent", self.german_content)
            .image("icon", self.icon)
    }
}
