//! "Why choose us" advantage entries.

use serde::{Deserialize, Serialize};
use sitehub_core::types::EntryId;
use validator::Validate;

use super::{DraftParts, EntryDraft, SiteEntry};
use crate::collection::Collection;
use crate::image::ImagePayload;

/// A bilingual advantage with an icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Advantage {
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
    /// Unix seconds at which the entry was added.
    #[serde(default)]
    pub created_at: i64,
}

/// Data required to add an advantage.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvantage {
    /// English title.
    #[validate(length(min = 1, max = 200))]
    pub english_title: String,
    /// English body text.
    pub english_content: String,
    /// German title.
    #[validate(length(min = 1, max = 200))]
    pub german_title: String,
    /// German body text.
    pub german_content: String,
    /// Icon image.
    #[validate(nested)]
    pub icon: ImagePayload,
}

impl SiteEntry for Advantage {
    const COLLECTION: Collection = Collection::Advantages;
    const EDITABLE_FIELDS: &'static [&'static str] = &[
        "englishTitle",
        "englishContent",
        "germanTitle",
        "germanContent",
        "icon",
    ];
    type Draft = NewAdvantage;

    fn id(&self) -> EntryId {
        self.id
    }

    fn image_urls(&self) -> Vec<String> {
        vec![self.icon.clone()]
    }
}

impl EntryDraft for NewAdvantage {
    fn into_parts(self) -> DraftParts {
        DraftParts::new()
            .field("englishTitle", self.english_title)
            .field("englishContent", self.english_content)
            .field("germanTitle", self.german_title)
            .field("germanContent", self.german_content)
            .image("icon", self.icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advantage_wire_names() {
        let id = EntryId::new();
        let advantage = Advantage {
            id,
            english_title: "Fast Delivery".into(),
            english_content: "We ship quickly".into(),
            german_title: "Schnelle Lieferung".into(),
            german_content: "Wir liefern schnell".into(),
            icon: "http://localhost/images/a.png".into(),
            created_at: 1_700_000_000,
        };
        let json = serde_json::to_value(&advantage).expect("serialize");
        assert_eq!(json["_id"], serde_json::json!(id.to_string()));
        assert_eq!(json["englishTitle"], "Fast Delivery");
        assert_eq!(json["createdAt"], 1_700_000_000);
        assert_eq!(advantage.image_urls(), vec!["http://localhost/images/a.png"]);
    }

    #[test]
    fn test_new_advantage_validation() {
        let draft: NewAdvantage = serde_json::from_value(serde_json::json!({
            "englishTitle": "",
            "englishContent": "c",
            "germanTitle": "g",
            "germanContent": "c",
            "icon": {"format": "png", "data": "AA=="}
        }))
        .expect("deserialize");
        assert!(draft.validate().is_err());
    }
}
