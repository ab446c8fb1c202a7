//! Property highlight entries.

use serde::{Deserialize, Serialize};
use sitehub_core::types::EntryId;
use validator::Validate;

use super::{DraftParts, EntryDraft, SiteEntry};
use crate::collection::Collection;
use crate::image::ImagePayload;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: EntryId,
    #[validate(length(min = 1, max = 200))]
    pub english_title: String,
    pub english_content: String,
    #[validate(length(min = 1, max = 200))]
    pub german_title: String,
    pub german_content: String,
    pub icon: String,
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProperty {
    #[validate(length(min = 1, max = 200))]
    pub english_title: String,
    pub english_content: String,
    #[validate(length(min = 1, max = 200))]
    pub german_title: String,
    pub german_content: String,
    #[validate(nested)]
    pub icon: ImagePayload,
}

impl SiteEntry for Property {
    const COLLECTION: Collection = Collection::Properties;
    const EDITABLE_FIELDS: &'static [&'static str] = &[
        "englishTitle",
        "englishContent",
        "germanTitle",
        "germanContent",
        "icon",
    ];
    type Draft = NewProperty;

    fn id(&self) -> EntryId {
        self.id
    }

    fn image_urls(&self) -> Vec<String> {
        vec![self.icon.clone()]
    }
}

impl EntryDraft for NewProperty {
    fn into_parts(self) -> DraftParts {
        DraftParts::new()
            .field("englishTitle", self.english_title)
            .field("englishContent", self.english_content)
            .field("germanTitle", self.german_title)
            .field("germanContent", self.german_content)
            .image("icon", self.icon)
    }
}
