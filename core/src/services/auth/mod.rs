//! Authentication service module
//!
//! This module provides registration, login and profile updates:
//! - Input validation (required fields first, then field constraints)
//! - Email uniqueness
//! - Password hashing and verification
//! - Token issuance

mod service;
mod types;

#[cfg(test)]
mod tests;

pub use service::AuthService;
pub use types::{LoginCommand, RegisterCommand, UpdateUserCommand};
