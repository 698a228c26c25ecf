//! Route handlers and the shared application state

pub mod auth;
pub mod jobs;

use std::sync::Arc;

use jt_core::repositories::{JobRepository, UserRepository};
use jt_core::services::{AuthService, JobService, TokenService};

/// Application state that holds shared services
pub struct AppState<U, J>
where
    U: UserRepository,
    J: JobRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub job_service: Arc<JobService<J>>,
    /// Also handed to the authentication middleware
    pub token_service: Arc<TokenService>,
}

impl<U, J> AppState<U, J>
where
    U: UserRepository,
    J: JobRepository,
{
    pub fn new(
        auth_service: Arc<AuthService<U>>,
        job_service: Arc<JobService<J>>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            auth_service,
            job_service,
            token_service,
        }
    }
}
