//! Team member entries.

use serde::{Deserialize, Serialize};
use sitehub_core::types::EntryId;
use validator::Validate;

use super::{DraftParts, EntryDraft, SiteEntry};
use crate::collection::Collection;
use crate::image::ImagePayload;

/// A team member. Uniqueness is enforced on the names, not on the roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id")]
    pub id: EntryId,
    #[validate(length(min = 1, max = 200))]
    pub english_name: String,
    #[validate(length(min = 1, max = 200))]
    pub english_role: String,
    #[validate(length(min = 1, max = 200))]
    pub german_name: String,
    #[validate(length(min = 1, max = 200))]
    pub german_role: String,
    /// Portrait image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub created_at: i64,
}

/// Data required to add a team member.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    #[validate(length(min = 1, max = 200))]
    pub english_name: String,
    #[validate(length(min = 1, max = 200))]
    pub english_role: String,
    #[validate(length(min = 1, max = 200))]
    pub german_name: String,
    #[validate(length(min = 1, max = 200))]
    pub german_role: String,
    #[validate(nested)]
    pub images: Vec<ImagePayload>,
}

impl SiteEntry for Member {
    const COLLECTION: Collection = Collection::Members;
    const EDITABLE_FIELDS: &'static [&'static str] = &[
        "englishName",
        "englishRole",
        "germanName",
        "germanRole",
        "images",
    ];
    type Draft = NewMember;

    fn id(&self) -> EntryId {
        self.id
    }

    fn image_urls(&self) -> Vec<String> {
        self.images.clone()
    }
}

impl EntryDraft for NewMember {
    fn into_parts(self) -> DraftParts {
        DraftParts::new()
            .field("englishName", self.english_name)
            .field("englishRole", self.english_role)
            .field("germanName", self.german_name)
            .field("germanRole", self.german_role)
            .images("images", self.images)
    }
}
