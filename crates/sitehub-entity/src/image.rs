//! Image value objects exchanged with clients.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw image content as sent by a client: a format tag plus the bytes.
///
/// On the wire `data` is a standard base64 string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ImagePayload {
    /// File extension style format tag (`png`, `svg`, ...).
    #[validate(length(min = 1, max = 10))]
    pub format: String,
    /// Image bytes.
    #[serde(with = "base64_bytes")]
    pub data: Bytes,
}

impl ImagePayload {
    /// Build a payload from a format tag and bytes.
    pub fn new(format: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            format: format.into(),
            data: data.into(),
        }
    }
}

/// An image slot value in an edit: either an already stored URL that is
/// kept as is, or a fresh payload to store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageInput {
    /// URL of an image stored earlier.
    Url(String),
    /// New image content.
    Payload(ImagePayload),
}

impl ImageInput {
    /// The URL, when this input references an existing image.
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Self::Url(url) => Some(url),
            Self::Payload(_) => None,
        }
    }
}

impl From<ImagePayload> for ImageInput {
    fn from(payload: ImagePayload) -> Self {
        Self::Payload(payload)
    }
}

mod base64_bytes {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64;
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64
            .decode(encoded.as_bytes())
            .map(Bytes::from)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_format() {
        let payload = ImagePayload::new("png", &b"\x89PNG"[..]);
        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json, serde_json::json!({"format": "png", "data": "iVBORw=="}));
        let back: ImagePayload = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back.data.as_ref(), b"\x89PNG");
    }

    #[test]
    fn test_payload_rejects_bad_base64() {
        let result = serde_json::from_value::<ImagePayload>(
            serde_json::json!({"format": "png", "data": "%%"}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_image_input_untagged() {
        let inputs: Vec<ImageInput> = serde_json::from_value(serde_json::json!([
            "http://localhost/images/a.png",
            {"format": "svg", "data": "PHN2Zz4="}
        ]))
        .expect("deserialize");
        assert_eq!(inputs[0].as_url(), Some("http://localhost/images/a.png"));
        match &inputs[1] {
            ImageInput::Payload(p) => assert_eq!(p.data.as_ref(), b"<svg>"),
            ImageInput::Url(_) => panic!("expected payload"),
        }
    }
}
