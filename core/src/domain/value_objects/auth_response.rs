//! Authentication response value object for API responses.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Outbound view of a user; never carries the password hash
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub last_name: String,
    pub location: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            last_name: user.last_name.clone(),
            location: user.location.clone(),
        }
    }
}

/// Authentication response returned by register, login and profile update
///
/// `location` is repeated at the top level so clients can prefill the job
/// location without digging into the user object.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// Public view of the authenticated user
    pub user: PublicUser,

    /// Signed bearer token
    pub token: String,

    /// The user's location
    pub location: String,
}

impl AuthResponse {
    /// Creates an authentication response for a user and a freshly issued token
    pub fn new(user: &User, token: String) -> Self {
        Self {
            user: PublicUser::from(user),
            token,
            location: user.location.clone(),
        }
    }
}
