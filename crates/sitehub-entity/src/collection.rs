//! Sub-collection descriptors.
//!
//! A [`Collection`] names one embedded array of the site-info document and
//! knows which of its fields must be unique and which hold image URLs. The
//! store, the service and the HTTP layer all key off these descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sitehub_core::AppError;

/// Language a unique key belongs to; decides which duplicate error is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// English variant of a bilingual field.
    English,
    /// German variant of a bilingual field.
    German,
    /// A field that is not part of a bilingual pair.
    Neutral,
}

/// A field whose value must be unique within its sub-collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniqueKey {
    /// Field name as stored in the document.
    pub field: &'static str,
    /// Human-readable label used in error messages.
    pub label: &'static str,
    /// Language of the field.
    pub language: Language,
}

impl UniqueKey {
    const fn new(field: &'static str, label: &'static str, language: Language) -> Self {
        Self {
            field,
            label,
            language,
        }
    }

    /// Error reported when another entry already holds this key's value.
    pub fn duplicate_error(&self) -> AppError {
        let message = format!("{} is already taken", self.label);
        match self.language {
            Language::English => AppError::duplicate_english(message),
            Language::German => AppError::duplicate_german(message),
            Language::Neutral => AppError::duplicate_field(message),
        }
    }
}

/// Shape of an image-bearing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFieldKind {
    /// A single image URL.
    Single,
    /// An ordered list of image URLs.
    List,
}

/// An image-bearing field of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageField {
    /// Field name as stored in the document.
    pub name: &'static str,
    /// Single URL or URL list.
    pub kind: ImageFieldKind,
}

impl ImageField {
    const fn single(name: &'static str) -> Self {
        Self {
            name,
            kind: ImageFieldKind::Single,
        }
    }

    const fn list(name: &'static str) -> Self {
        Self {
            name,
            kind: ImageFieldKind::List,
        }
    }
}

const ENGLISH_TITLE: UniqueKey = UniqueKey::new("englishTitle", "English title", Language::English);
const GERMAN_TITLE: UniqueKey = UniqueKey::new("germanTitle", "German title", Language::German);
const ENGLISH_NAME: UniqueKey = UniqueKey::new("englishName", "English name", Language::English);
const GERMAN_NAME: UniqueKey = UniqueKey::new("germanName", "German name", Language::German);
const NAME: UniqueKey = UniqueKey::new("name", "Name", Language::Neutral);

const TITLE_KEYS: &[UniqueKey] = &[ENGLISH_TITLE, GERMAN_TITLE];
const NAME_KEYS: &[UniqueKey] = &[ENGLISH_NAME, GERMAN_NAME];
const NEUTRAL_NAME_KEYS: &[UniqueKey] = &[NAME];
const ICON: &[ImageField] = &[ImageField::single("icon")];
const IMAGES: &[ImageField] = &[ImageField::list("images")];
const ICON_AND_IMAGES: &[ImageField] = &[ImageField::single("icon"), ImageField::list("images")];

/// The sub-collections embedded in a site-info document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    /// "Why choose us" advantages.
    Advantages,
    /// Offered services.
    Services,
    /// Team members.
    Members,
    /// Customer satisfaction testimonials.
    Satisfactions,
    /// Social network links.
    SocialNetworks,
    /// Landing page slider headers.
    SliderHeaders,
    /// Property highlights.
    Properties,
    /// Numbers and statistics.
    Numbers,
}

impl Collection {
    /// Every sub-collection, in document order.
    pub const ALL: [Collection; 8] = [
        Self::Advantages,
        Self::Services,
        Self::Members,
        Self::Satisfactions,
        Self::SocialNetworks,
        Self::SliderHeaders,
        Self::Properties,
        Self::Numbers,
    ];

    /// Field name of the array in the document (`advantages`, ...).
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Advantages => "advantages",
            Self::Services => "services",
            Self::Members => "members",
            Self::Satisfactions => "satisfactions",
            Self::SocialNetworks => "socialNetworks",
            Self::SliderHeaders => "sliderHeaders",
            Self::Properties => "properties",
            Self::Numbers => "numbers",
        }
    }

    /// Key a single entry is reported under (`advantage`, ...).
    pub fn singular(&self) -> &'static str {
        match self {
            Self::Advantages => "advantage",
            Self::Services => "service",
            Self::Members => "member",
            Self::Satisfactions => "satisfaction",
            Self::SocialNetworks => "socialNetwork",
            Self::SliderHeaders => "sliderHeader",
            Self::Properties => "property",
            Self::Numbers => "number",
        }
    }

    /// Path segment used by the HTTP routes (`advantage`, `social-network`, ...).
    pub fn route_segment(&self) -> &'static str {
        match self {
            Self::SocialNetworks => "social-network",
            Self::SliderHeaders => "slider-header",
            other => other.singular(),
        }
    }

    /// Fields that must be unique within this collection.
    pub fn unique_keys(&self) -> &'static [UniqueKey] {
        match self {
            Self::Members => NAME_KEYS,
            Self::SocialNetworks => NEUTRAL_NAME_KEYS,
            Self::Numbers => &[],
            _ => TITLE_KEYS,
        }
    }

    /// Image-bearing fields of this collection's entries.
    pub fn image_fields(&self) -> &'static [ImageField] {
        match self {
            Self::Services => ICON_AND_IMAGES,
            Self::Members | Self::Satisfactions => IMAGES,
            _ => ICON,
        }
    }

    /// Look up the unique key stored under `field`.
    pub fn unique_key(&self, field: &str) -> Option<&'static UniqueKey> {
        self.unique_keys().iter().find(|k| k.field == field)
    }

    /// Look up the image field stored under `field`.
    pub fn image_field(&self, field: &str) -> Option<&'static ImageField> {
        self.image_fields().iter().find(|f| f.name == field)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for Collection {
    type Err = AppError;

    /// Accepts both the document field name and the route segment.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.field_name() == s || c.route_segment() == s)
            .ok_or_else(|| AppError::not_found(format!("Unknown site-info collection '{s}'")))
    }
}
