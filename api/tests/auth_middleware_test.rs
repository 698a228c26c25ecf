//! Integration tests for the authentication gate

mod common;

use actix_web::{http::StatusCode, test, web, App, HttpResponse};
use jsonwebtoken::{encode, EncodingKey, Header};
use uuid::Uuid;

use jt_api::create_app;
use jt_api::middleware::auth::AuthContext;
use jt_core::domain::entities::token::Claims;

use common::{bearer, context, send, TEST_SECRET};

fn sign(claims: &Claims, secret: &str) -> String {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

#[actix_web::test]
async fn test_missing_header_is_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/v1/jobs").to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
    assert_eq!(body["message"], "Authentication invalid");
}

#[actix_web::test]
async fn test_non_bearer_scheme_is_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let token = ctx.tokens.issue(Uuid::new_v4(), "Ana").unwrap();
    let req = test::TestRequest::get()
        .uri("/api/v1/jobs")
        .insert_header(("Authorization", format!("Token {}", token)))
        .to_request();
    let (status, _) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_garbage_token_is_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/jobs/stats")
        .insert_header(bearer("invalid-token"))
        .to_request();
    let (status, _) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_expired_token_is_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let expired = Claims::new(Uuid::new_v4(), "Ana", -60).unwrap();
    let req = test::TestRequest::get()
        .uri("/api/v1/jobs")
        .insert_header(bearer(&sign(&expired, TEST_SECRET)))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Authentication invalid");
}

#[actix_web::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let claims = Claims::new(Uuid::new_v4(), "Ana", 3600).unwrap();
    let req = test::TestRequest::patch()
        .uri("/api/v1/auth/updateUser")
        .insert_header(bearer(&sign(&claims, "some-other-secret")))
        .set_json(serde_json::json!({}))
        .to_request();
    let (status, _) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_valid_token_reaches_handler() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let token = ctx.tokens.issue(Uuid::new_v4(), "Ana").unwrap();
    let req = test::TestRequest::get()
        .uri("/api/v1/jobs")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalJobs"], 0);
}

#[actix_web::test]
async fn test_auth_context_extractor_without_gate() {
    async fn protected_handler(auth: AuthContext) -> HttpResponse {
        HttpResponse::Ok().json(serde_json::json!({ "userId": auth.user_id }))
    }

    let app = test::init_service(
        App::new().route("/protected", web::get().to(protected_handler)),
    )
    .await;

    let req = test::TestRequest::get().uri("/protected").to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_public_routes_need_no_token() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let req = test::TestRequest::get().uri("/api/v1/nowhere").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}
