//! Main token service implementation

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use jt_shared::MAX_LIFETIME_DAYS;
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::errors::{AuthError, DomainError, DomainResult};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT bearer tokens
///
/// Holds only immutable key material, so one instance is shared across all
/// request workers.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Returns
    ///
    /// A new `TokenService` instance, or an internal error when the secret
    /// is empty or the lifetime is outside `1..=MAX_LIFETIME_DAYS`
    pub fn new(config: TokenServiceConfig) -> DomainResult<Self> {
        if config.jwt_secret.is_empty() {
            return Err(DomainError::Internal {
                message: "JWT secret must not be empty".to_string(),
            });
        }
        if !config.has_valid_lifetime() {
            return Err(DomainError::Internal {
                message: format!(
                    "JWT lifetime must be between 1 and {} days",
                    MAX_LIFETIME_DAYS
                ),
            });
        }

        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.leeway = 0;
        validation.validate_exp = true;

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed token for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `name` - The user's display name, embedded in the claims
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded token
    /// * `Err(DomainError)` - Signing failed
    pub fn issue(&self, user_id: Uuid, name: &str) -> DomainResult<String> {
        let claims = Claims::new(user_id, name, self.config.lifetime_seconds())?;
        self.encode_jwt(&claims)
    }

    /// Verifies a token and returns its claims
    ///
    /// Bad signatures, expired tokens, malformed payloads and non-UUID
    /// subjects are all reported as the same
    /// [`AuthError::AuthenticationFailed`].
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error_kind = ?e.kind(), "Token verification failed");
            DomainError::Auth(AuthError::AuthenticationFailed)
        })?;

        if data.claims.user_uuid().is_err() {
            tracing::debug!("Token subject is not a valid user id");
            return Err(AuthError::AuthenticationFailed.into());
        }

        Ok(data.claims)
    }

    pub(crate) fn encode_jwt(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(self.config.algorithm), claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Token generation failed: {}", e),
            }
        })
    }
}
