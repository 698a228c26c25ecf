pub mod job;
pub mod user;

pub use job::{JobRepository, MockJobRepository};
pub use user::{MockUserRepository, UserRepository};
