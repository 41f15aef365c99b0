use thiserror::Error;

pub mod account;
pub mod database;
pub mod token;

pub use account::AccountError;
pub use database::DatabaseError;
pub use token::{TokenError, TokenFailClass};

/// Internal error type for store and service operations
///
/// Separates infrastructure errors (database, crypto) from domain errors
/// (account, token). Not exposed via API - endpoints must convert to
/// `UsersApiError`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Crypto error: {operation} failed: {message}")]
    Crypto {
        operation: String,
        message: String,
    },

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> Self {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn crypto(operation: impl Into<String>, message: impl Into<String>) -> Self {
        InternalError::Crypto {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
