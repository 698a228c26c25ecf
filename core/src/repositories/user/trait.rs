//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first and every email argument is expected to be
//! normalized (see [`normalize_email`](crate::domain::normalize_email)).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations own the uniqueness guarantee for email addresses: a
/// second `create` (or a `save` that moves onto a taken address) must fail
/// with [`AuthError::EmailAlreadyInUse`](crate::errors::AuthError::EmailAlreadyInUse).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by normalized email
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with that email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError)` - Duplicate email or storage failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(DomainError)` - User missing, duplicate email or storage failure
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Check whether an email is already registered
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
