//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

/// Default token lifetime (30 days)
pub const DEFAULT_TOKEN_LIFETIME_DAYS: i64 = 30;

/// Claims structure for JWT payload
///
/// Serialized as `{ userId, name, iat, exp }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Identifier of the authenticated user
    pub user_id: String,

    /// Display name at the time of issue
    pub name: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a user
    ///
    /// # Arguments
    ///
    /// * `user_id` - The user's UUID
    /// * `name` - The user's display name
    /// * `lifetime_seconds` - Seconds until the token expires
    ///
    /// # Returns
    ///
    /// A new `Claims` instance issued now, or an internal error when the
    /// expiry falls outside the representable date range
    pub fn new(user_id: Uuid, name: impl Into<String>, lifetime_seconds: i64) -> DomainResult<Self> {
        let now = Utc::now();
        let expiry = Duration::try_seconds(lifetime_seconds)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| DomainError::Internal {
                message: format!("Token lifetime of {} seconds is out of range", lifetime_seconds),
            })?;

        Ok(Self {
            user_id: user_id.to_string(),
            name: name.into(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        })
    }

    /// Gets the user ID from the claims
    ///
    /// # Returns
    ///
    /// `Ok(Uuid)` if the subject can be parsed as a UUID, `Err` otherwise
    pub fn user_uuid(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.user_id)
    }
}
