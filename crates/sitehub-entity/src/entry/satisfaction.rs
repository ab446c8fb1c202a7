//! Customer satisfaction testimonials.

use serde::{Deserialize, Serialize};
use sitehub_core::types::EntryId;
use validator::Validate;

use super::{DraftParts, EntryDraft, SiteEntry};
use crate::collection::Collection;
use crate::image::ImagePayload;

/// A bilingual testimonial with pictures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Satisfaction {
    #[serde(rename = "_id")]
    pub id: EntryId,
    #[validate(length(min = 1, max = 200))]
    pub english_title: String,
    pub english_content: String,
    #[validate(length(min = 1, max = 200))]
    pub german_title: String,
    pub german_content: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSatisfaction {
    #[validate(length(min = 1, max = 200))]
    pub english_title: String,
    pub english_content: String,
    #[validate(length(min = 1, max = 200))]
    pub german_title: String,
    pub german_content: String,
    #[validate(nested)]
    pub images: Vec<ImagePayload>,
}

impl SiteEntry for Satisfaction {
    const COLLECTION: Collection = Collection::Satisfactions;
    const EDITABLE_FIELDS: &'static [&'static str] = &[
        "englishTitle",
        "englishContent",
        "germanTitle",
        "germanContent",
        "images",
    ];
    type Draft = NewSatisfaction;

    fn id(&self) -> EntryId {
        self.id
    }

    fn image_urls(&self) -> Vec<String> {
        self.images.clone()
    }
}

impl EntryDraft for NewSatisfaction {
    fn into_parts(self) -> DraftParts {
        DraftParts::new()
            .field("englishTitle", self.english_title)
            .field("englishContent", self.english_content)
            .field("germanTitle", self.german_title)
            .field("germanContent", self.german_content)
            .images("images", self.images)
    }
}
