//! Authentication route handlers
//!
//! - `POST /api/v1/auth/register`
//! - `POST /api/v1/auth/login`
//! - `PATCH /api/v1/auth/updateUser` (authenticated)

pub mod login;
pub mod register;
pub mod update_user;

pub use login::login;
pub use register::register;
pub use update_user::update_user;
