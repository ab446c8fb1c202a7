//! Update builder for entry writes.

use serde_json::{Map, Value};

use sitehub_core::error::AppError;
use sitehub_core::result::AppResult;
use sitehub_entity::{Collection, ImageField, SiteEntry};
use validator::Validate;

/// An edit reduced to the fields the entry type allows, split into plain
/// fields and image fields still to be resolved.
#[derive(Debug, Default)]
pub(crate) struct EntryPatch {
    pub fields: Map<String, Value>,
    pub images: Vec<(&'static ImageField, Value)>,
}

impl EntryPatch {
    /// Filter `updates` to the editable fields of `E`. Unknown keys are
    /// dropped; an update with nothing left is [`AppError::no_changes`].
    pub(crate) fn build<E: SiteEntry>(updates: Map<String, Value>) -> AppResult<Self> {
        let mut patch = Self::default();
        for (name, value) in updates {
            if !E::EDITABLE_FIELDS.contains(&name.as_str()) {
                continue;
            }
            match E::COLLECTION.image_field(&name) {
                Some(field) => patch.images.push((field, value)),
                None => {
                    patch.fields.insert(name, value);
                }
            }
        }

        if patch.fields.is_empty() && patch.images.is_empty() {
            return Err(AppError::no_changes());
        }
        normalize_unique_keys(E::COLLECTION, &mut patch.fields)?;
        Ok(patch)
    }
}

/// Trim the unique-key values present in `fields`.
///
/// Unique keys must be strings that are non-empty once trimmed.
pub(crate) fn normalize_unique_keys(
    collection: Collection,
    fields: &mut Map<String, Value>,
) -> AppResult<()> {
    for key in collection.unique_keys() {
        let Some(value) = fields.get_mut(key.field) else {
            continue;
        };
        let trimmed = value
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                AppError::validation(format!("{} must be a non-empty text", key.label))
            })?;
        *value = Value::String(trimmed);
    }
    Ok(())
}

/// Check that applying `patch` to `current` still yields a valid `E`:
/// field types must decode and the entry's length and range rules hold.
pub(crate) fn check_patch<E: SiteEntry>(
    current: &Map<String, Value>,
    patch: &Map<String, Value>,
) -> AppResult<()> {
    let mut merged = current.clone();
    merged.extend(patch.iter().map(|(k, v)| (k.clone(), v.clone())));
    let entry = serde_json::from_value::<E>(Value::Object(merged))
        .map_err(|e| AppError::validation(format!("Invalid update: {e}")))?;
    entry
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))
}
