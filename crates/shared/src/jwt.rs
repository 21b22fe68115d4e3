//! JWT token generation and validation.
//!
//! Production tokens come from the identity service; generation exists for
//! the seeder and for tests.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::Claims;
use crate::config::JwtSettings;

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Access token expiration in seconds.
    pub access_token_expires_secs: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "change-me-in-production".to_string(),
            access_token_expires_secs: 900,
        }
    }
}

impl From<&JwtSettings> for JwtConfig {
    fn from(settings: &JwtSettings) -> Self {
        Self {
            secret: settings.secret.clone(),
            access_token_expires_secs: i64::try_from(settings.access_token_expiry_secs)
                .unwrap_or(i64::MAX),
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token decoding failed.
    #[error("failed to decode token: {0}")]
    DecodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expires_secs", &self.config.access_token_expires_secs)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generates an access token for a profile.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_access_token(
        &self,
        profile_id: Uuid,
        name: &str,
        position: &str,
    ) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::seconds(self.config.access_token_expires_secs);
        let claims = Claims::new(profile_id, name, position, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates and decodes a token.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` if the token has expired.
    /// Returns `JwtError::DecodingError` if the token is malformed or the
    /// signature does not match.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::default();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }

    /// Returns the access token lifetime in seconds.
    #[must_use]
    pub const fn access_token_expires_in(&self) -> i64 {
        self.config.access_token_expires_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            access_token_expires_secs: 900,
        })
    }

    #[test]
    fn test_generate_and_validate_token() {
        let service = create_test_service();
        let profile_id = Uuid::new_v4();

        let token = service
            .generate_access_token(profile_id, "Huda", "ExpenseAuditer")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.profile_id(), profile_id);
        assert_eq!(claims.name, "Huda");
        assert_eq!(claims.position, "ExpenseAuditer");
    }

    #[test]
    fn test_token_lifetime_matches_config() {
        let service = create_test_service();
        assert_eq!(service.access_token_expires_in(), 900);

        let token = service
            .generate_access_token(Uuid::new_v4(), "Huda", "ExpenseAuditer")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();
        let lifetime = claims.exp - claims.iat;
        // `iat` and `exp` read the clock separately.
        assert!((899..=900).contains(&lifetime), "lifetime was {lifetime}");
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingError(_))));
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let other = JwtService::new(JwtConfig {
            secret: "another-secret".to_string(),
            access_token_expires_secs: 900,
        });
        let token = other
            .generate_access_token(Uuid::new_v4(), "Ali", "Manager")
            .unwrap();

        assert!(create_test_service().validate_token(&token).is_err());
    }

    #[test]
    fn test_expired_token() {
        // Past the default 60s leeway.
        let service = JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            access_token_expires_secs: -120,
        });
        let token = service
            .generate_access_token(Uuid::new_v4(), "Ali", "Manager")
            .unwrap();

        assert!(matches!(service.validate_token(&token), Err(JwtError::Expired)));
    }

    #[test]
    fn test_config_from_settings() {
        let settings = JwtSettings {
            secret: "s".to_string(),
            access_token_expiry_secs: 3600,
        };
        let config = JwtConfig::from(&settings);
        assert_eq!(config.secret, "s");
        assert_eq!(config.access_token_expires_secs, 3600);
    }
}
