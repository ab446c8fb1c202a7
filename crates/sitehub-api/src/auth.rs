//! Admin bearer token verification.
//!
//! Tokens are issued elsewhere; this side only checks the HS256 signature,
//! the expiry and the `role` claim.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use sitehub_core::config::auth::AuthConfig;
use sitehub_core::error::AppError;

/// Claims carried by an admin panel token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Subject, usually the admin account id.
    #[serde(default)]
    pub sub: String,
    /// Role of the bearer.
    pub role: String,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Issued at (Unix timestamp).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

/// Validates admin tokens against the configured secret and role.
#[derive(Clone)]
pub struct AdminTokenDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
    admin_role: String,
}

impl std::fmt::Debug for AdminTokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminTokenDecoder")
            .field("validation", &self.validation)
            .field("admin_role", &self.admin_role)
            .finish()
    }
}

impl AdminTokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // seconds of clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            admin_role: config.admin_role.clone(),
        }
    }

    /// Decodes `token` and checks that it belongs to an admin.
    pub fn decode_admin_token(&self, token: &str) -> Result<AdminClaims, AppError> {
        let claims = decode::<AdminClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::unauthorized("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::unauthorized("Invalid token format")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::unauthorized("Invalid token signature")
                }
                _ => AppError::unauthorized(format!("Token validation failed: {e}")),
            })?
            .claims;

        if claims.role != self.admin_role {
            return Err(AppError::unauthorized("Admin role required"));
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use sitehub_core::ErrorKind;

    const SECRET: &str = "test-secret";

    fn decoder() -> AdminTokenDecoder {
        AdminTokenDecoder::new(&AuthConfig {
            jwt_secret: SECRET.to_string(),
            admin_role: "admin".to_string(),
        })
    }

    fn token(role: &str, exp_offset: i64, secret: &str) -> String {
        let claims = AdminClaims {
            sub: "admin-1".to_string(),
            role: role.to_string(),
            exp: chrono::Utc::now().timestamp() + exp_offset,
            iat: None,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("encode")
    }

    #[test]
    fn test_admin_token_accepted() {
        let claims = decoder()
            .decode_admin_token(&token("admin", 3600, SECRET))
            .expect("valid token");
        assert_eq!(claims.sub, "admin-1");
        assert_eq!(claims.role, "admin");
    }

    #[test]
    fn test_wrong_role_rejected() {
        let err = decoder()
            .decode_admin_token(&token("editor", 3600, SECRET))
            .expect_err("not an admin");
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "Admin role required");
    }

    #[test]
    fn test_expired_and_forged_tokens_rejected() {
        let err = decoder()
            .decode_admin_token(&token("admin", -3600, SECRET))
            .expect_err("expired");
        assert_eq!(err.message, "Token has expired");

        let err = decoder()
            .decode_admin_token(&token("admin", 3600, "other-secret"))
            .expect_err("forged");
        assert_eq!(err.kind, ErrorKind::Unauthorized);

        let err = decoder()
            .decode_admin_token("not-a-jwt")
            .expect_err("garbage");
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }
}
