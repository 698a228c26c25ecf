//! Main authentication service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::user::{mask_email, normalize_email, User};
use crate::domain::value_objects::AuthResponse;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::types::{LoginCommand, RegisterCommand, UpdateUserCommand};

/// Authentication service for registration, login and profile updates
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Password hasher
    password_hasher: PasswordHasher,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `user_repository` - Repository for user data persistence
    /// * `token_service` - Service for JWT token management
    /// * `password_hasher` - Hasher configured with the bcrypt cost
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        password_hasher: PasswordHasher,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            password_hasher,
        }
    }

    /// Register a new user
    ///
    /// This method:
    /// 1. Requires name, email and password
    /// 2. Checks field constraints
    /// 3. Rejects an email that is already registered
    /// 4. Hashes the password and stores the user
    /// 5. Issues a token
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The public user, token and location
    /// * `Err(DomainError)` - Validation failure, duplicate email or internal error
    pub async fn register(&self, command: RegisterCommand) -> DomainResult<AuthResponse> {
        let name = ValidationError::require("name", command.name)?;
        let email = ValidationError::require("email", command.email)?;
        let password = require_password(command.password)?;

        User::validate_name(&name)?;
        User::validate_email(&email)?;
        User::validate_password(&password)?;

        let email = normalize_email(&email);
        if self.user_repository.exists_by_email(&email).await? {
            tracing::info!(email = %mask_email(&email), "Registration rejected: email in use");
            return Err(AuthError::EmailAlreadyInUse.into());
        }

        let password_hash = self.password_hasher.hash_async(password).await?;
        let user = self
            .user_repository
            .create(User::new(name, &email, password_hash))
            .await?;

        let token = self.token_service.issue(user.id, &user.name)?;
        tracing::info!(user_id = %user.id, email = %user.masked_email(), "User registered");

        Ok(AuthResponse::new(&user, token))
    }

    /// Authenticate with email and password
    ///
    /// An unknown email and a wrong password produce the same
    /// [`AuthError::AuthenticationFailed`].
    pub async fn login(&self, command: LoginCommand) -> DomainResult<AuthResponse> {
        let email = ValidationError::require("email", command.email)?;
        let password = require_password(command.password)?;

        let email = normalize_email(&email);
        let Some(user) = self.user_repository.find_by_email(&email).await? else {
            tracing::warn!(email = %mask_email(&email), "Login failed");
            return Err(AuthError::AuthenticationFailed.into());
        };

        let matches = self
            .password_hasher
            .verify_async(password, user.password_hash.clone())
            .await;
        if !matches {
            tracing::warn!(email = %user.masked_email(), "Login failed");
            return Err(AuthError::AuthenticationFailed.into());
        }

        let token = self.token_service.issue(user.id, &user.name)?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthResponse::new(&user, token))
    }

    /// Replace the profile of the authenticated user and re-issue a token
    ///
    /// # Arguments
    ///
    /// * `user_id` - Identity resolved by the authentication gate
    /// * `command` - New email, name, last name and location; all required
    pub async fn update_user(
        &self,
        user_id: Uuid,
        command: UpdateUserCommand,
    ) -> DomainResult<AuthResponse> {
        let email = ValidationError::require("email", command.email)?;
        let name = ValidationError::require("name", command.name)?;
        let last_name = ValidationError::require("lastName", command.last_name)?;
        let location = ValidationError::require("location", command.location)?;

        User::validate_email(&email)?;
        User::validate_name(&name)?;
        User::validate_last_name(&last_name)?;
        User::validate_location(&location)?;

        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(user_id))?;

        let email = normalize_email(&email);
        if email != user.email && self.user_repository.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyInUse.into());
        }

        user.update_profile(name, &email, last_name, location);
        let user = self.user_repository.save(user).await?;

        let token = self.token_service.issue(user.id, &user.name)?;
        tracing::info!(user_id = %user.id, "User profile updated");

        Ok(AuthResponse::new(&user, token))
    }
}

// Passwords are taken verbatim; only an absent or empty value is missing.
fn require_password(password: Option<String>) -> Result<String, ValidationError> {
    match password {
        Some(password) if !password.is_empty() => Ok(password),
        _ => Err(ValidationError::RequiredField {
            field: "password".to_string(),
        }),
    }
}
