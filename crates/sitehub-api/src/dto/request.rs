//! Request bodies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use sitehub_entity::ImagePayload;

/// `PATCH /panel/site-info/{kind}/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditEntryRequest {
    /// Partial field map; keys outside the entry's editable fields are ignored.
    pub updates: Map<String, Value>,
}

/// `PUT /panel/site-info/logo`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetLogoRequest {
    #[validate(nested)]
    pub logo: ImagePayload,
}
