use crate::errors::internal::{AccountError, InternalError};
use crate::types::dto::common::ErrorResponse;
use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

/// Message shared by "no such account" and "wrong password" so a caller
/// cannot tell which one failed
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect username or password";

/// Errors returned by the users endpoints
#[derive(ApiResponse, Debug)]
pub enum UsersApiError {
    /// Email is already registered to another account
    #[oai(status = 400)]
    DuplicateEmail(Json<ErrorResponse>),

    /// Unknown email or wrong password
    #[oai(status = 400)]
    InvalidCredentials(Json<ErrorResponse>),

    /// Bearer token missing, malformed or not signed by this server
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),

    /// No account with the requested id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl UsersApiError {
    pub fn duplicate_email() -> Self {
        UsersApiError::DuplicateEmail(Json(ErrorResponse {
            error: "duplicate_email".to_string(),
            msg: "email exists already".to_string(),
            status_code: 400,
        }))
    }

    pub fn invalid_credentials() -> Self {
        UsersApiError::InvalidCredentials(Json(ErrorResponse {
            error: "invalid_credentials".to_string(),
            msg: INVALID_CREDENTIALS_MESSAGE.to_string(),
            status_code: 400,
        }))
    }

    pub fn unauthorized() -> Self {
        UsersApiError::Unauthorized(Json(ErrorResponse {
            error: "invalid_token".to_string(),
            msg: "Invalid or malformed bearer token".to_string(),
            status_code: 401,
        }))
    }

    pub fn not_found() -> Self {
        UsersApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            msg: "user not found".to_string(),
            status_code: 404,
        }))
    }

    /// Generic 500; never carries internal details
    pub fn internal_server_error() -> Self {
        UsersApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            msg: "server error".to_string(),
            status_code: 500,
        }))
    }

    /// Convert InternalError to UsersApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Infrastructure failures are logged here and reported as a bare 500.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Account(AccountError::DuplicateEmail(email)) => {
                tracing::warn!("Duplicate email registration attempt: {}", email);
                Self::duplicate_email()
            }
            InternalError::Account(AccountError::InvalidCredentials) => {
                tracing::debug!("Invalid credentials attempt");
                Self::invalid_credentials()
            }
            InternalError::Account(AccountError::NotFound(id)) => {
                tracing::debug!("Account not found: {}", id);
                Self::not_found()
            }
            InternalError::Token(token_err) => {
                tracing::debug!("Rejected bearer token: {}", token_err);
                Self::unauthorized()
            }
            InternalError::Database(_) => {
                tracing::error!("Store error: {}", err);
                Self::internal_server_error()
            }
            InternalError::Crypto { operation, .. } => {
                tracing::error!("Crypto error in {}: {}", operation, err);
                Self::internal_server_error()
            }
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> &str {
        match self {
            UsersApiError::DuplicateEmail(json)
            | UsersApiError::InvalidCredentials(json)
            | UsersApiError::Unauthorized(json)
            | UsersApiError::NotFound(json)
            | UsersApiError::InternalError(json) => &json.0.msg,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            UsersApiError::DuplicateEmail(json)
            | UsersApiError::InvalidCredentials(json)
            | UsersApiError::Unauthorized(json)
            | UsersApiError::NotFound(json)
            | UsersApiError::InternalError(json) => json.0.status_code,
        }
    }
}

impl From<InternalError> for UsersApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for UsersApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
