use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use chrono::Utc;
use std::fmt;
use crate::errors::InternalError;
use crate::errors::internal::TokenError;
use crate::types::db::account;
use crate::types::internal::auth::Claims;

/// Issues and verifies signed, stateless bearer tokens (HS256 JWT)
pub struct TokenService {
    jwt_secret: String,
    jwt_expiration_minutes: Option<i64>,
}

impl TokenService {
    /// Create a TokenService whose tokens never expire
    pub fn new(jwt_secret: String) -> Self {
        Self {
            jwt_secret,
            jwt_expiration_minutes: None,
        }
    }

    /// Set the lifetime of issued tokens; `None` keeps them valid indefinitely
    ///
    /// With a lifetime configured, tokens without an `exp` claim are rejected.
    pub fn with_expiration(mut self, minutes: Option<i64>) -> Self {
        self.jwt_expiration_minutes = minutes;
        self
    }

    pub fn expiration_minutes(&self) -> Option<i64> {
        self.jwt_expiration_minutes
    }

    /// Build fresh claims for the account as it is right now
    ///
    /// Fails when the configured lifetime pushes `exp` past the i64 range.
    pub fn claims_for(&self, account: &account::Model) -> Result<Claims, InternalError> {
        let now = Utc::now().timestamp();

        let exp = match self.jwt_expiration_minutes {
            Some(minutes) => Some(
                minutes
                    .checked_mul(60)
                    .and_then(|seconds| now.checked_add(seconds))
                    .ok_or_else(|| {
                        InternalError::crypto(
                            "jwt_generation",
                            format!("Token lifetime of {} minutes overflows exp", minutes),
                        )
                    })?,
            ),
            None => None,
        };

        Ok(Claims {
            name: account.name.clone(),
            email: account.email.clone(),
            id: account.id.clone(),
            score: account.score,
            iat: now,
            exp,
        })
    }

    /// Build claims for the account and sign them
    pub fn issue_for(&self, account: &account::Model) -> Result<String, InternalError> {
        self.issue(&self.claims_for(account)?)
    }

    /// Sign the given claims
    pub fn issue(&self, claims: &Claims) -> Result<String, InternalError> {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| InternalError::crypto("jwt_generation", format!("Failed to generate JWT: {}", e)))
    }

    /// Verify a token and return its claims
    ///
    /// Checks signature, algorithm (HS256 only) and structure. `exp` is
    /// always honoured when present and required only when a lifetime is
    /// configured.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &self.validation(),
        )?;

        Ok(token_data.claims)
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        if self.jwt_expiration_minutes.is_none() {
            validation.required_spec_claims.clear();
        }
        validation
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_expiration_minutes", &self.jwt_expiration_minutes)
            .finish()
    }
}

impl fmt::Display for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.jwt_expiration_minutes {
            Some(minutes) => write!(f, "TokenService {{ jwt_expiration: {}min }}", minutes),
            None => write!(f, "TokenService {{ jwt_expiration: never }}"),
        }
    }
}
