// API-facing error types
pub mod users;

pub use users::{UsersApiError, INVALID_CREDENTIALS_MESSAGE};
