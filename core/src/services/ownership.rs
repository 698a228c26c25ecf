//! Resource ownership guard

use uuid::Uuid;

use crate::errors::{AuthError, DomainResult};

/// Allow the operation only when the requester owns the resource
///
/// # Arguments
///
/// * `requester` - Identity resolved by the authentication gate
/// * `owner` - Identity recorded on the resource
///
/// # Returns
///
/// * `Ok(())` - Requester is the owner
/// * `Err(DomainError::Auth(AuthError::InsufficientPermissions))` - Anyone else
pub fn check_permissions(requester: &Uuid, owner: &Uuid) -> DomainResult<()> {
    if requester == owner {
        return Ok(());
    }

    tracing::warn!(requester = %requester, owner = %owner, "Ownership check failed");
    Err(AuthError::InsufficientPermissions.into())
}
