//! Social network links shown in the site footer.

use serde::{Deserialize, Serialize};
use sitehub_core::types::EntryId;
use validator::Validate;

use super::{DraftParts, EntryDraft, SiteEntry};
use crate::collection::Collection;
use crate::image::ImagePayload;

/// A social network link. `name` is unique within the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SocialNetwork {
    /// Entry identifier.
    #[serde(rename = "_id")]
    pub id: EntryId,
    /// Network name, e.g. "Instagram".
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Profile link.
    #[validate(length(min = 1, max = 2048))]
    pub link: String,
    /// Whether the link is rendered on the website.
    pub show: bool,
    /// Icon image URL.
    pub icon: String,
    /// Unix seconds at which the entry was added.
    #[serde(default)]
    pub created_at: i64,
}

/// Data required to add a social network link.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSocialNetwork {
    /// Network name.
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    /// Profile link.
    #[validate(length(min = 1, max = 2048))]
    pub link: String,
    /// Visibility flag; defaults to shown.
    #[serde(default = "default_show")]
    pub show: bool,
    /// Icon image.
    #[validate(nested)]
    pub icon: ImagePayload,
}

fn default_show() -> bool {
    true
}

impl SiteEntry for SocialNetwork {
    const COLLECTION: Collection = Collection::SocialNetworks;
    const EDITABLE_FIELDS: &'static [&'static str] = &["name", "link", "show", "icon"];
    type Draft = NewSocialNetwork;

    fn id(&self) -> EntryId {
        self.id
    }

    fn image_urls(&self) -> Vec<String> {
        vec![self.icon.clone()]
    }
}

impl EntryDraft for NewSocialNetwork {
    fn into_parts(self) -> DraftParts {
        DraftParts::new()
            .field("name", self.name)
            .field("link", self.link)
            .field("show", self.show)
            .image("icon", self.icon)
    }
}
