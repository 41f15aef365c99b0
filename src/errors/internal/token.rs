use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFailClass {
    /// Token is not structurally a JWT or cannot be decoded
    Malformed,

    /// Token is structurally valid but the signature does not verify
    BadSignature,

    /// Token header names an algorithm other than the one we sign with
    WrongAlgorithm,

    /// Token verified but its `exp` has passed
    Expired,

    /// Token verified but rejected by claim validation (missing `exp`, nbf, ...)
    ClaimsRejected,

    /// Anything jsonwebtoken reports that does not fit the classes above
    Internal,
}

/// A bearer token that failed verification
///
/// Every class surfaces to clients as the same 401; the class is kept for logs.
#[derive(Debug, Error)]
#[error("Invalid token ({class:?}): {source}")]
pub struct TokenError {
    pub class: TokenFailClass,
    #[source]
    pub source: JwtError,
}

impl TokenError {
    pub fn class(&self) -> TokenFailClass {
        self.class
    }
}

impl From<JwtError> for TokenError {
    fn from(source: JwtError) -> Self {
        let class = classify_jwt_error(&source);
        Self { class, source }
    }
}

fn classify_jwt_error(err: &JwtError) -> TokenFailClass {
    match err.kind() {
        ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
            TokenFailClass::Malformed
        }

        ErrorKind::InvalidSignature => TokenFailClass::BadSignature,

        ErrorKind::InvalidAlgorithm
        | ErrorKind::MissingAlgorithm
        | ErrorKind::InvalidAlgorithmName => TokenFailClass::WrongAlgorithm,

        ErrorKind::ExpiredSignature => TokenFailClass::Expired,

        ErrorKind::ImmatureSignature
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidIssuer
        | ErrorKind::InvalidSubject
        | ErrorKind::MissingRequiredClaim(_) => TokenFailClass::ClaimsRejected,

        _ => TokenFailClass::Internal,
    }
}
