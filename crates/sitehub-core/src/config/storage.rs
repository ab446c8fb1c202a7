//! Image storage configuration.

use serde::{Deserialize, Serialize};

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory for all runtime data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Directory, relative to `data_root`, that receives stored images.
    #[serde(default = "default_images_dir")]
    pub images_dir: String,
    /// Base URL prepended to every image URL handed out.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum accepted image size in bytes (default 5 MB).
    #[serde(default = "default_max_image_size")]
    pub max_image_size_bytes: u64,
    /// Accepted image formats (file extensions).
    #[serde(default = "default_allowed_formats")]
    pub allowed_formats: Vec<String>,
}

impl StorageConfig {
    /// Whether `format` is on the allow-list (case-insensitive).
    pub fn is_format_allowed(&self, format: &str) -> bool {
        self.allowed_formats
            .iter()
            .any(|f| f.eq_ignore_ascii_case(format))
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_root: default_data_root(),
            images_dir: default_images_dir(),
            public_base_url: default_public_base_url(),
            max_image_size_bytes: default_max_image_size(),
            allowed_formats: default_allowed_formats(),
        }
    }
}

fn default_data_root() -> String {
    "./data".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

fn default_public_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_max_image_size() -> u64 {
    5_242_880 // 5 MB
}

fn default_allowed_formats() -> Vec<String> {
    ["svg", "png", "jpg", "jpeg"]
        .into_iter()
        .map(String::from)
        .collect()
}
