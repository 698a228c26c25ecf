//! Token service module for JWT management
//!
//! Issues and verifies the stateless HS256 bearer tokens that identify a
//! user on every protected request.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
