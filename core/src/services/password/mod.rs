//! Password hashing with bcrypt
//!
//! Hashing and verification are CPU-bound; the async variants move the work
//! onto tokio's blocking pool so request workers are not stalled.

use jt_shared::PasswordConfig;

use crate::errors::{DomainError, DomainResult};

/// One-way password hasher with a fixed cost factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// Create a hasher with an explicit bcrypt cost (valid range 4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Create a hasher from configuration
    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.bcrypt_cost)
    }

    /// The configured cost factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh random salt
    ///
    /// Fails only when the configured cost is out of range.
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    /// Check a plaintext password against a stored digest
    ///
    /// A malformed digest is treated as a mismatch.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        bcrypt::verify(plaintext, digest).unwrap_or(false)
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_async(&self, plaintext: String) -> DomainResult<String> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Password hashing task failed: {}", e),
            })?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    pub async fn verify_async(&self, plaintext: String, digest: String) -> bool {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &digest))
            .await
            .unwrap_or(false)
    }
}
