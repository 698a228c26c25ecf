//! Business services containing domain logic and use cases.

pub mod auth;
pub mod job;
pub mod ownership;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, LoginCommand, RegisterCommand, UpdateUserCommand};
pub use job::{CreateJobCommand, JobSearchParams, JobService, UpdateJobCommand};
pub use ownership::check_permissions;
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
