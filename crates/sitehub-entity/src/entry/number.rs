//! Numbers and statistics entries ("500+ happy customers").

use serde::{Deserialize, Serialize};
use sitehub_core::types::EntryId;
use validator::Validate;

use super::{DraftParts, EntryDraft, SiteEntry};
use crate::collection::Collection;
use crate::image::ImagePayload;

/// A headline figure with bilingual captions. No field is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NumberStat {
    /// Entry identifier.
    #[serde(rename = "_id")]
    pub id: EntryId,
    /// The figure itself.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub number: i64,
    /// English caption.
    pub english_content: String,
    /// German caption.
    pub german_content: String,
    /// Icon image URL.
    pub icon: String,
    /// Unix seconds at which the entry was added.
    #[serde(default)]
    pub created_at: i64,
}

/// Data required to add a figure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewNumberStat {
    /// The figure; defaults to zero.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub number: i64,
    /// English caption.
    pub english_content: String,
    /// German caption.
    pub german_content: String,
    /// Icon image.
    #[validate(nested)]
    pub icon: ImagePayload,
}

impl SiteEntry for NumberStat {
    const COLLECTION: Collection = Collection::Numbers;
    const EDITABLE_FIELDS: &'static [&'static str] =
        &["number", "englishContent", "germanContent", "icon"];
    type Draft = NewNumberStat;

    fn id(&self) -> EntryId {
        self.id
    }

    fn image_urls(&self) -> Vec<String> {
        vec![self.icon.clone()]
    }
}

impl EntryDraft for NewNumberStat {
    fn into_parts(self) -> DraftParts {
        DraftParts::new()
            .field("number", self.number)
            .field("englishContent", self.english_content)
            .field("germanContent", self.german_content)
            .image("icon", self.icon)
    }
}
