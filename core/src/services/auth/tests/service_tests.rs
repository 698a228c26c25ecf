//! Unit tests for authentication service

use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::auth::{AuthService, LoginCommand, RegisterCommand, UpdateUserCommand};
use crate::services::password::PasswordHasher;
use crate::services::token::{TokenService, TokenServiceConfig};

struct Fixture {
    service: AuthService<MockUserRepository>,
    users: Arc<MockUserRepository>,
    tokens: Arc<TokenService>,
}

fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::new("test-secret")).unwrap());
    let service = AuthService::new(users.clone(), tokens.clone(), PasswordHasher::new(4));
    Fixture {
        service,
        users,
        tokens,
    }
}

fn register_command(name: &str, email: &str, password: &str) -> RegisterCommand {
    RegisterCommand {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

fn login_command(email: &str, password: &str) -> LoginCommand {
    LoginCommand {
        email: Some(email.to_string()),
        password: Some(password.to_string()),
    }
}

fn update_command(email: &str, name: &str, last_name: &str, location: &str) -> UpdateUserCommand {
    UpdateUserCommand {
        email: Some(email.to_string()),
        name: Some(name.to_string()),
        last_name: Some(last_name.to_string()),
        location: Some(location.to_string()),
    }
}

fn required_field(result: Result<impl std::fmt::Debug, DomainError>) -> String {
    match result {
        Err(DomainError::ValidationErr(ValidationError::RequiredField { field })) => field,
        other => panic!("Expected RequiredField error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_register_success() {
    let f = fixture();
    let response = f
        .service
        .register(register_command("Ana", "a@x.com", "secret1"))
        .await
        .unwrap();

    assert_eq!(response.user.name, "Ana");
    assert_eq!(response.user.email, "a@x.com");
    assert_eq!(response.location, "my city");

    let claims = f.tokens.verify(&response.token).unwrap();
    assert_eq!(claims.user_uuid().unwrap(), response.user.id);

    let stored = f.users.find_by_id(response.user.id).await.unwrap().unwrap();
    assert_ne!(stored.password_hash, "secret1");
    assert!(PasswordHasher::new(4).verify("secret1", &stored.password_hash));
}

#[tokio::test]
async fn test_register_requires_fields_in_order() {
    let f = fixture();

    let result = f.service.register(RegisterCommand::default()).await;
    assert_eq!(required_field(result), "name");

    let mut command = register_command("Ana", "a@x.com", "secret1");
    command.email = Some("   ".to_string());
    assert_eq!(required_field(f.service.register(command).await), "email");

    let mut command = register_command("Ana", "a@x.com", "secret1");
    command.password = None;
    assert_eq!(required_field(f.service.register(command).await), "password");

    assert!(f.users.is_empty().await);
}

#[tokio::test]
async fn test_register_field_constraints() {
    let f = fixture();

    let result = f.service.register(register_command("Al", "a@x.com", "secret1")).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { .. }))
    ));

    let result = f.service.register(register_command("Ana", "not-an-email", "secret1")).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidFormat { .. }))
    ));

    let result = f.service.register(register_command("Ana", "a@x.com", "short")).await;
    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidLength { ref field, .. })) if field == "password"
    ));
}

#[tokio::test]
async fn test_register_duplicate_email_case_insensitive() {
    let f = fixture();
    let original = f
        .service
        .register(register_command("Ana", "a@x.com", "secret1"))
        .await
        .unwrap();

    let result = f
        .service
        .register(register_command("Impostor", "A@X.COM", "secret2"))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyInUse))
    ));

    assert_eq!(f.users.len().await, 1);
    let stored = f.users.find_by_id(original.user.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Ana");
    assert!(PasswordHasher::new(4).verify("secret1", &stored.password_hash));
}

#[tokio::test]
async fn test_login_success() {
    let f = fixture();
    let registered = f
        .service
        .register(register_command("Ana", "a@x.com", "secret1"))
        .await
        .unwrap();

    let response = f.service.login(login_command(" A@x.com ", "secret1")).await.unwrap();
    assert_eq!(response.user.id, registered.user.id);

    let claims = f.tokens.verify(&response.token).unwrap();
    assert_eq!(claims.user_uuid().unwrap(), registered.user.id);
    assert_eq!(claims.name, "Ana");
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_email_are_indistinguishable() {
    let f = fixture();
    f.service
        .register(register_command("Ana", "a@x.com", "secret1"))
        .await
        .unwrap();

    let wrong_password = f.service.login(login_command("a@x.com", "wrong-password")).await;
    let unknown_email = f.service.login(login_command("nobody@x.com", "secret1")).await;

    let wrong_password = wrong_password.unwrap_err();
    let unknown_email = unknown_email.unwrap_err();
    assert!(matches!(
        wrong_password,
        DomainError::Auth(AuthError::AuthenticationFailed)
    ));
    assert!(matches!(
        unknown_email,
        DomainError::Auth(AuthError::AuthenticationFailed)
    ));
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
}

#[tokio::test]
async fn test_login_requires_fields() {
    let f = fixture();
    let result = f
        .service
        .login(LoginCommand {
            email: Some("a@x.com".to_string()),
            password: None,
        })
        .await;
    assert_eq!(required_field(result), "password");
}

#[tokio::test]
async fn test_update_user_success() {
    let f = fixture();
    let registered = f
        .service
        .register(register_command("Ana", "a@x.com", "secret1"))
        .await
        .unwrap();

    let response = f
        .service
        .update_user(
            registered.user.id,
            update_command("Ana.New@x.com", "Anna", "Smith", "Lisbon"),
        )
        .await
        .unwrap();

    assert_eq!(response.user.email, "ana.new@x.com");
    assert_eq!(response.user.last_name, "Smith");
    assert_eq!(response.location, "Lisbon");

    let claims = f.tokens.verify(&response.token).unwrap();
    assert_eq!(claims.name, "Anna");

    // Password is untouched by a profile update
    f.service
        .login(login_command("ana.new@x.com", "secret1"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_user_missing_location() {
    let f = fixture();
    let registered = f
        .service
        .register(register_command("Ana", "a@x.com", "secret1"))
        .await
        .unwrap();

    let mut command = update_command("a@x.com", "Ana", "Smith", "Lisbon");
    command.location = None;
    let result = f.service.update_user(registered.user.id, command).await;
    assert_eq!(required_field(result), "location");
}

#[tokio::test]
async fn test_update_user_unknown_id() {
    let f = fixture();
    let result = f
        .service
        .update_user(Uuid::new_v4(), update_command("a@x.com", "Ana", "Smith", "Lisbon"))
        .await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_update_user_email_taken() {
    let f = fixture();
    f.service
        .register(register_command("Ana", "a@x.com", "secret1"))
        .await
        .unwrap();
    let bob = f
        .service
        .register(register_command("Bob", "b@x.com", "secret2"))
        .await
        .unwrap();

    let result = f
        .service
        .update_user(bob.user.id, update_command("A@x.com", "Bob", "Jones", "Porto"))
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::EmailAlreadyInUse))
    ));
}

#[tokio::test]
async fn test_update_user_keeping_own_email() {
    let f = fixture();
    let ana = f
        .service
        .register(register_command("Ana", "a@x.com", "secret1"))
        .await
        .unwrap();

    let response = f
        .service
        .update_user(ana.user.id, update_command("a@x.com", "Ana", "Smith", "Faro"))
        .await
        .unwrap();
    assert_eq!(response.location, "Faro");
}
