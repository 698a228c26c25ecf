//! End-to-end tests for registration, login and profile update

mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;

use jt_api::create_app;

use common::{bearer, context, send};

#[actix_web::test]
async fn test_register_login_update_flow() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    // Register
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "name": "Ana", "email": "a@x.com", "password": "secret1" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["name"], "Ana");
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["lastName"], "lastName");
    assert_eq!(body["location"], "my city");
    assert!(body["user"].get("password").is_none());
    assert!(body["user"].get("passwordHash").is_none());
    assert!(!body.to_string().contains("secret1"));

    let user_id = body["user"]["id"].as_str().unwrap().to_string();
    let claims = ctx.tokens.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.user_id, user_id);

    // Login
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "A@X.com", "password": "secret1" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();
    assert_eq!(ctx.tokens.verify(&token).unwrap().user_id, user_id);

    // Update profile without location
    let req = test::TestRequest::patch()
        .uri("/api/v1/auth/updateUser")
        .insert_header(bearer(&token))
        .set_json(json!({ "email": "a@x.com", "name": "Ana", "lastName": "Silva" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert_eq!(body["details"]["field"], "location");

    // Update profile
    let req = test::TestRequest::patch()
        .uri("/api/v1/auth/updateUser")
        .insert_header(bearer(&token))
        .set_json(json!({
            "email": "ana@x.com", "name": "Ana", "lastName": "Silva", "location": "Lisbon"
        }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "ana@x.com");
    assert_eq!(body["user"]["lastName"], "Silva");
    assert_eq!(body["location"], "Lisbon");
    assert_eq!(
        ctx.tokens.verify(body["token"].as_str().unwrap()).unwrap().user_id,
        user_id
    );
}

#[actix_web::test]
async fn test_wrong_password_and_unknown_email_look_the_same() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    common::register_user(&ctx, "Ana", "a@x.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "a@x.com", "password": "wrong-password" }))
        .to_request();
    let (wrong_status, wrong_body) = send(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({ "email": "nobody@x.com", "password": "secret1" }))
        .to_request();
    let (unknown_status, unknown_body) = send(&app, req).await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_body["error"], unknown_body["error"]);
    assert_eq!(wrong_body["message"], unknown_body["message"]);
}

#[actix_web::test]
async fn test_duplicate_email_conflicts() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;
    let (original_id, _) = common::register_user(&ctx, "Ana", "a@x.com").await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "name": "Other", "email": " A@x.COM ", "password": "secret2" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CONFLICT");
    assert_eq!(ctx.users.len().await, 1);

    use jt_core::repositories::UserRepository;
    let stored = ctx.users.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.id, original_id);
    assert_eq!(stored.name, "Ana");
}

#[actix_web::test]
async fn test_register_reports_first_missing_field() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "name": "Ana" }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Please provide email");
    assert_eq!(body["details"]["field"], "email");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BAD_REQUEST");
}

#[actix_web::test]
async fn test_oversized_password_is_rejected_at_the_edge() {
    let ctx = context();
    let app = test::init_service(create_app(ctx.state.clone(), &ctx.config)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({ "name": "Ana", "email": "a@x.com", "password": "p".repeat(100) }))
        .to_request();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "password");
    assert!(ctx.users.is_empty().await);
}
