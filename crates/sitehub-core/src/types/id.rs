//! Twelve-byte identifiers rendered as 24-character lowercase hex strings.
//!
//! The layout follows the familiar document-store object id: a 4-byte
//! big-endian unix timestamp, 5 bytes of per-process randomness and a
//! 3-byte wrapping counter. Ids generated by one process therefore sort by
//! creation time and never collide within that process.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Error returned when parsing a malformed identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid object id '{0}': expected 24 hexadecimal characters")]
pub struct ParseIdError(pub String);

fn process_random() -> &'static [u8; 5] {
    static RANDOM: OnceLock<[u8; 5]> = OnceLock::new();
    RANDOM.get_or_init(|| {
        let seed = Uuid::new_v4();
        let mut out = [0u8; 5];
        out.copy_from_slice(&seed.as_bytes()[..5]);
        out
    })
}

fn next_counter() -> u32 {
    static COUNTER: OnceLock<AtomicU32> = OnceLock::new();
    let counter = COUNTER.get_or_init(|| {
        let seed = Uuid::new_v4();
        let b = seed.as_bytes();
        AtomicU32::new(u32::from_be_bytes([0, b[13], b[14], b[15]]))
    });
    counter.fetch_add(1, Ordering::Relaxed) & 0x00ff_ffff
}

fn generate() -> [u8; 12] {
    let mut bytes = [0u8; 12];
    let secs = chrono::Utc::now().timestamp() as u32;
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..9].copy_from_slice(process_random());
    bytes[9..].copy_from_slice(&next_counter().to_be_bytes()[1..]);
    bytes
}

fn parse_hex(s: &str) -> Result<[u8; 12], ParseIdError> {
    let raw = s.as_bytes();
    if raw.len() != 24 {
        return Err(ParseIdError(s.to_string()));
    }
    let mut bytes = [0u8; 12];
    for (i, pair) in raw.chunks_exact(2).enumerate() {
        let hi = (pair[0] as char).to_digit(16);
        let lo = (pair[1] as char).to_digit(16);
        match (hi, lo) {
            (Some(hi), Some(lo)) => bytes[i] = ((hi << 4) | lo) as u8,
            _ => return Err(ParseIdError(s.to_string())),
        }
    }
    Ok(bytes)
}

/// Macro to define a newtype wrapper around a 12-byte object id.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name([u8; 12]);

        impl $name {
            /// Create a new identifier.
            pub fn new() -> Self {
                Self(generate())
            }

            /// Return the raw bytes.
            pub fn as_bytes(&self) -> &[u8; 12] {
                &self.0
            }

            /// Unix timestamp (seconds) embedded in the identifier.
            pub fn timestamp(&self) -> u32 {
                u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                for b in &self.0 {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_hex(s).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a sub-collection entry.
    EntryId
);

define_id!(
    /// Unique identifier for a stored image file.
    ImageId
);
