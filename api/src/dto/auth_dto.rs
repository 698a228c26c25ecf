//! Authentication request bodies
//!
//! Every field is optional at the JSON level so that a missing field is
//! reported by the service as "Please provide <field>" rather than as a
//! deserialization failure. The `validate` rules only bound sizes that the
//! storage and the password hash cannot accept.

use serde::Deserialize;
use validator::Validate;

use jt_core::services::{LoginCommand, RegisterCommand, UpdateUserCommand};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub email: Option<String>,
    /// bcrypt only considers the first 72 bytes
    #[validate(length(max = 72))]
    pub password: Option<String>,
}

impl From<RegisterRequest> for RegisterCommand {
    fn from(request: RegisterRequest) -> Self {
        Self {
            name: request.name,
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(max = 255))]
    pub email: Option<String>,
    #[validate(length(max = 72))]
    pub password: Option<String>,
}

impl From<LoginRequest> for LoginCommand {
    fn from(request: LoginRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(max = 255))]
    pub email: Option<String>,
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub location: Option<String>,
}

impl From<UpdateUserRequest> for UpdateUserCommand {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            email: request.email,
            name: request.name,
            last_name: request.last_name,
            location: request.location,
        }
    }
}
