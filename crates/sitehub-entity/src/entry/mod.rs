//! Sub-collection entry types.
//!
//! Every entry type implements [`SiteEntry`], which ties it to its
//! [`Collection`] descriptor, lists the fields an edit may touch and names
//! the draft type used to add a new entry.

pub mod advantage;
pub mod member;
pub mod number;
pub mod property;
pub mod satisfaction;
pub mod service;
pub mod slider_header;
pub mod social_network;

pub use advantage::{Advantage, NewAdvantage};
pub use member::{Member, NewMember};
pub use number::{NewNumberStat, NumberStat};
pub use property::{NewProperty, Property};
pub use satisfaction::{NewSatisfaction, Satisfaction};
pub use service::{NewService, Service};
pub use slider_header::{NewSliderHeader, SliderHeader};
pub use social_network::{NewSocialNetwork, SocialNetwork};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use sitehub_core::types::EntryId;
use validator::Validate;

use crate::collection::Collection;
use crate::image::ImagePayload;

/// A typed element of one of the site-info sub-collections.
///
/// Entries carry the same length and range rules as their drafts so an
/// edit is held to the rules an add was.
pub trait SiteEntry: Validate + Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// The sub-collection this entry type lives in.
    const COLLECTION: Collection;

    /// Field names an edit may change; any other key is ignored.
    const EDITABLE_FIELDS: &'static [&'static str];

    /// Input accepted when adding a new entry.
    type Draft: EntryDraft;

    /// Identifier generated when the entry was added.
    fn id(&self) -> EntryId;

    /// Every image URL this entry owns.
    fn image_urls(&self) -> Vec<String>;
}

/// Input for adding an entry: plain fields plus raw image payloads.
pub trait EntryDraft: Validate + DeserializeOwned + Send + 'static {
    /// Split the draft into stored fields and images still to be stored.
    fn into_parts(self) -> DraftParts;
}

/// Images carried by one image field of a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftImages {
    /// A single image.
    Single(ImagePayload),
    /// An ordered list of images.
    List(Vec<ImagePayload>),
}

/// A draft split into its parts.
#[derive(Debug, Clone, Default)]
pub struct DraftParts {
    /// Non-image fields, keyed by their stored name.
    pub fields: Map<String, Value>,
    /// Image fields, in declaration order.
    pub images: Vec<(&'static str, DraftImages)>,
}

impl DraftParts {
    /// Start an empty set of parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain field.
    pub fn field(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Add a single-image field.
    pub fn image(mut self, name: &'static str, payload: ImagePayload) -> Self {
        self.images.push((name, DraftImages::Single(payload)));
        self
    }

    /// Add an image-list field.
    pub fn images(mut self, name: &'static str, payloads: Vec<ImagePayload>) -> Self {
        self.images.push((name, DraftImages::List(payloads)));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_parts_builder() {
        let parts = DraftParts::new()
            .field("englishTitle", "Fast")
            .field("show", true)
            .image("icon", ImagePayload::new("png", &b"x"[..]));
        assert_eq!(parts.fields.len(), 2);
        assert_eq!(parts.fields["show"], Value::Bool(true));
        assert_eq!(parts.images.len(), 1);
        assert_eq!(parts.images[0].0, "icon");
    }

    #[test]
    fn test_editable_fields_cover_unique_and_image_fields() {
        fn check<E: SiteEntry>() {
            for key in E::COLLECTION.unique_keys() {
                assert!(E::EDITABLE_FIELDS.contains(&key.field), "{}", key.field);
            }
            for image in E::COLLECTION.image_fields() {
                assert!(E::EDITABLE_FIELDS.contains(&image.name), "{}", image.name);
            }
        }
        check::<Advantage>();
        check::<Service>();
        check::<Member>();
        check::<Satisfaction>();
        check::<SocialNetwork>();
        check::<SliderHeader>();
        check::<Property>();
        check::<NumberStat>();
    }
}
