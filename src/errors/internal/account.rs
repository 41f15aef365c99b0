use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Covers both an unknown email and a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account not found: {0}")]
    NotFound(String),
}
