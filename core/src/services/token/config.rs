//! Configuration for the token service

use jsonwebtoken::Algorithm;
use std::fmt;

use jt_shared::{JwtConfig, MAX_LIFETIME_DAYS};

use crate::domain::entities::token::DEFAULT_TOKEN_LIFETIME_DAYS;

/// Configuration for the token service
#[derive(Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Token lifetime in days
    pub lifetime_days: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            lifetime_days: DEFAULT_TOKEN_LIFETIME_DAYS,
        }
    }
}

impl TokenServiceConfig {
    /// Create a configuration with an explicit secret and the default lifetime
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Token lifetime in seconds
    pub fn lifetime_seconds(&self) -> i64 {
        self.lifetime_days.saturating_mul(86400)
    }

    /// Whether the lifetime lies in `1..=MAX_LIFETIME_DAYS`
    pub fn has_valid_lifetime(&self) -> bool {
        (1..=MAX_LIFETIME_DAYS).contains(&self.lifetime_days)
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            lifetime_days: config.lifetime_days,
        }
    }
}

impl fmt::Debug for TokenServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenServiceConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .field("lifetime_days", &self.lifetime_days)
            .finish()
    }
}
