//! Panel authentication configuration.

use serde::{Deserialize, Serialize};

/// Bearer token verification settings for the admin panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT verification (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Value the `role` claim must carry to reach panel routes.
    #[serde(default = "default_admin_role")]
    pub admin_role: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            admin_role: default_admin_role(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_admin_role() -> String {
    "admin".to_string()
}
