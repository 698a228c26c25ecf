//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test, web,
};
use serde_json::Value;
use uuid::Uuid;

use jt_api::AppState;
use jt_core::repositories::{MockJobRepository, MockUserRepository};
use jt_core::services::{
    AuthService, JobService, PasswordHasher, RegisterCommand, TokenService, TokenServiceConfig,
};
use jt_shared::AppConfig;

pub const TEST_SECRET: &str = "integration-test-secret";

pub type TestState = AppState<MockUserRepository, MockJobRepository>;

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<MockUserRepository>,
    pub jobs: Arc<MockJobRepository>,
    pub tokens: Arc<TokenService>,
    pub config: AppConfig,
}

pub fn context() -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let jobs = Arc::new(MockJobRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new(TEST_SECRET)).unwrap());

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        tokens.clone(),
        PasswordHasher::new(4),
    ));
    let job_service = Arc::new(JobService::new(jobs.clone()));

    TestContext {
        state: web::Data::new(AppState::new(auth_service, job_service, tokens.clone())),
        users,
        jobs,
        tokens,
        config: AppConfig::development(),
    }
}

/// Calls the app and returns status and JSON body, whether the failure was
/// rendered by a handler or raised by middleware
pub async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    match test::try_call_service(app, req).await {
        Ok(resp) => {
            let status = resp.status();
            let body = test::read_body(resp).await;
            (status, parse_body(&body))
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let body = actix_web::body::to_bytes(resp.into_body())
                .await
                .unwrap_or_default();
            (status, parse_body(&body))
        }
    }
}

fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(bytes).unwrap()
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

/// Registers a user through the service and returns `(user id, token)`
pub async fn register_user(ctx: &TestContext, name: &str, email: &str) -> (Uuid, String) {
    let response = ctx
        .state
        .auth_service
        .register(RegisterCommand {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some("secret1".to_string()),
        })
        .await
        .unwrap();
    (response.user.id, response.token)
}
