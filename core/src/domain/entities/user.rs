//! User entity representing a registered account in the Job Tracker system.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::errors::ValidationError;

/// Default value for `last_name` when none is supplied
pub const DEFAULT_LAST_NAME: &str = "lastName";

/// Default value for `location` when none is supplied
pub const DEFAULT_LOCATION: &str = "my city";

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 20;
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const LAST_NAME_MAX_LENGTH: usize = 20;
pub const LOCATION_MAX_LENGTH: usize = 20;

/// User entity representing a registered user
///
/// There is no `Serialize` implementation; the password hash never leaves
/// the service. Use [`PublicUser`](crate::domain::PublicUser)
/// for any outbound representation.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Normalized (trimmed, lower-cased) email address, unique per user
    pub email: String,

    /// bcrypt digest of the password
    pub password_hash: String,

    /// Family name
    pub last_name: String,

    /// Free-text location, also used as the default job location
    pub location: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with default profile fields
    ///
    /// # Arguments
    ///
    /// * `name` - Display name
    /// * `email` - Email address; normalized before storing
    /// * `password_hash` - Already hashed password
    pub fn new(name: String, email: &str, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email: normalize_email(email),
            password_hash,
            last_name: DEFAULT_LAST_NAME.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the profile fields and bumps `updated_at`
    pub fn update_profile(&mut self, name: String, email: &str, last_name: String, location: String) {
        self.name = name;
        self.email = normalize_email(email);
        self.last_name = last_name;
        self.location = location;
        self.updated_at = Utc::now();
    }

    /// Email suitable for log lines
    pub fn masked_email(&self) -> String {
        mask_email(&self.email)
    }

    /// Checks a display name against the length constraints
    pub fn validate_name(name: &str) -> Result<(), ValidationError> {
        ValidationError::check_length("name", name, NAME_MIN_LENGTH, Some(NAME_MAX_LENGTH))
    }

    /// Checks an email address is syntactically valid
    pub fn validate_email(email: &str) -> Result<(), ValidationError> {
        use validator::ValidateEmail;

        if email.validate_email() {
            Ok(())
        } else {
            Err(ValidationError::InvalidFormat {
                field: "email".to_string(),
            })
        }
    }

    /// Checks a plaintext password meets the minimum length
    pub fn validate_password(password: &str) -> Result<(), ValidationError> {
        ValidationError::check_length("password", password, PASSWORD_MIN_LENGTH, None)
    }

    /// Checks a last name against the length constraint
    pub fn validate_last_name(last_name: &str) -> Result<(), ValidationError> {
        ValidationError::check_length("lastName", last_name, 1, Some(LAST_NAME_MAX_LENGTH))
    }

    /// Checks a location against the length constraint
    pub fn validate_location(location: &str) -> Result<(), ValidationError> {
        ValidationError::check_length("location", location, 1, Some(LOCATION_MAX_LENGTH))
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.masked_email())
            .field("password_hash", &"[REDACTED]")
            .field("last_name", &self.last_name)
            .field("location", &self.location)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Trims and lower-cases an email address
///
/// Applied before every write and every lookup so that uniqueness is
/// case-insensitive.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Masks the local part of an email address for logging
///
/// `alice@example.com` becomes `a***@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{}***@{}", first, domain)
        }
        None => "***".to_string(),
    }
}
