//! Input commands for the authentication service
//!
//! Every field is optional so that a missing value surfaces as a
//! `RequiredField` validation error naming the field.

/// Registration input
#[derive(Debug, Clone, Default)]
pub struct RegisterCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login input
#[derive(Debug, Clone, Default)]
pub struct LoginCommand {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Profile update input; all four fields are required
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
}
