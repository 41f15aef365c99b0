use crate::errors::InternalError;

/// Salted one-way password hashing (bcrypt)
///
/// Hashing is deliberately slow, so both operations run on the blocking
/// thread pool and are awaited before their result is used.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    /// Work factor used for every stored password
    pub const DEFAULT_COST: u32 = 12;

    pub fn new() -> Self {
        Self {
            cost: Self::DEFAULT_COST,
        }
    }

    /// Hasher with a custom work factor (4..=31)
    ///
    /// Only tests should go below `DEFAULT_COST`.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password into a self-describing bcrypt digest
    pub async fn hash(&self, plaintext: &str) -> Result<String, InternalError> {
        let cost = self.cost;
        let plaintext = plaintext.to_owned();

        tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| InternalError::crypto("bcrypt_hash", e.to_string()))?
            .map_err(|e| InternalError::crypto("bcrypt_hash", e.to_string()))
    }

    /// Check a plaintext password against a stored digest
    ///
    /// A mismatch is `Ok(false)`. So is a digest that cannot be parsed: a
    /// corrupt record must not let anyone in, and must not look different to
    /// the caller than a wrong password.
    pub async fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, InternalError> {
        let plaintext = plaintext.to_owned();
        let digest = digest.to_owned();

        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &digest))
            .await
            .map_err(|e| InternalError::crypto("bcrypt_verify", e.to_string()))?;

        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!("Stored password digest could not be verified: {}", e);
                Ok(false)
            }
        }
    }
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self::new()
    }
}
