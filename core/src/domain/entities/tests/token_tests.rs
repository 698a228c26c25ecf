//! Unit tests for token claims

use uuid::Uuid;

use chrono::Utc;

use crate::domain::entities::token::{Claims, DEFAULT_TOKEN_LIFETIME_DAYS};
use crate::errors::DomainError;

#[test]
fn test_claims_new() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new(user_id, "Ana", 3600).unwrap();

    assert_eq!(claims.user_id, user_id.to_string());
    assert_eq!(claims.name, "Ana");
    assert_eq!(claims.exp - claims.iat, 3600);
    assert!(claims.exp > Utc::now().timestamp());
}

#[test]
fn test_claims_user_uuid_parsing() {
    let user_id = Uuid::new_v4();
    let claims = Claims::new(user_id, "Ana", 60).unwrap();
    assert_eq!(claims.user_uuid().unwrap(), user_id);

    let mut bad = claims.clone();
    bad.user_id = "not-a-uuid".to_string();
    assert!(bad.user_uuid().is_err());
}

#[test]
fn test_claims_expired() {
    let claims = Claims::new(Uuid::new_v4(), "Ana", -10).unwrap();
    assert!(claims.exp <= Utc::now().timestamp());
}

#[test]
fn test_claims_out_of_range_lifetime_is_an_error() {
    let huge = 200_000_000_i64 * 86400;
    assert!(matches!(
        Claims::new(Uuid::new_v4(), "Ana", huge),
        Err(DomainError::Internal { .. })
    ));
    assert!(matches!(
        Claims::new(Uuid::new_v4(), "Ana", i64::MAX),
        Err(DomainError::Internal { .. })
    ));
}

#[test]
fn test_claims_serialize_camel_case() {
    let claims = Claims::new(Uuid::new_v4(), "Ana", DEFAULT_TOKEN_LIFETIME_DAYS * 86400).unwrap();
    let json = serde_json::to_value(&claims).unwrap();

    assert!(json.get("userId").is_some());
    assert!(json.get("name").is_some());
    assert!(json.get("iat").is_some());
    assert!(json.get("exp").is_some());
    assert!(json.get("user_id").is_none());
}
