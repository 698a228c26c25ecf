//! Authentication configuration: token signing and password hashing

use serde::{Deserialize, Serialize};
use std::fmt;

use super::env_parse;

const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Upper bound on `JWT_LIFETIME_DAYS` (ten years)
pub const MAX_LIFETIME_DAYS: i64 = 3650;

/// JWT authentication configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    #[serde(skip_serializing)]
    pub secret: String,

    /// Token lifetime in days
    #[serde(default = "default_lifetime_days")]
    pub lifetime_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            lifetime_days: default_lifetime_days(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token lifetime in days
    pub fn with_lifetime_days(mut self, days: i64) -> Self {
        self.lifetime_days = days;
        self
    }

    /// Whether the lifetime lies in `1..=MAX_LIFETIME_DAYS`
    pub fn has_valid_lifetime(&self) -> bool {
        (1..=MAX_LIFETIME_DAYS).contains(&self.lifetime_days)
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

// The signing secret must never reach a log line.
impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .field("lifetime_days", &self.lifetime_days)
            .finish()
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PasswordConfig {
    /// bcrypt cost factor (4..=31)
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = JwtConfig::default();
        let secret = std::env::var("JWT_SECRET").unwrap_or(defaults.secret);
        let lifetime_days = env_parse("JWT_LIFETIME_DAYS").unwrap_or(defaults.lifetime_days);
        let bcrypt_cost = env_parse("BCRYPT_COST").unwrap_or_else(default_bcrypt_cost);

        Self {
            jwt: JwtConfig {
                secret,
                lifetime_days,
            },
            password: PasswordConfig { bcrypt_cost },
        }
    }
}

fn default_lifetime_days() -> i64 {
    30
}

fn default_bcrypt_cost() -> u32 {
    10
}
