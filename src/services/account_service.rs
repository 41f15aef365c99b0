use std::sync::Arc;

use crate::errors::InternalError;
use crate::errors::internal::AccountError;
use crate::services::{CredentialHasher, TokenService};
use crate::stores::AccountStore;
use crate::types::db::account;

/// Account service that orchestrates registration, login, profile and score flows
///
/// Holds no per-request state; everything lives in the AccountStore.
pub struct AccountService {
    account_store: Arc<AccountStore>,
    credential_hasher: Arc<CredentialHasher>,
    token_service: Arc<TokenService>,
}

impl AccountService {
    pub fn new(
        account_store: Arc<AccountStore>,
        credential_hasher: Arc<CredentialHasher>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            account_store,
            credential_hasher,
            token_service,
        }
    }

    /// Create an account and return a token for it
    ///
    /// # Returns
    /// * `Ok(String)` - Signed token carrying the new account's claims
    /// * `Err(InternalError)` - DuplicateEmail if the email is registered, or infrastructure error
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: String,
    ) -> Result<String, InternalError> {
        if self.account_store.find_by_email(&email).await?.is_some() {
            return Err(AccountError::DuplicateEmail(email).into());
        }

        let password_hash = self.credential_hasher.hash(&password).await?;

        // A concurrent registration can still win between the check and the
        // insert; the store reports that as DuplicateEmail too
        let account = self.account_store.create(name, email, password_hash).await?;

        tracing::info!("Registered account {}", account.id);

        self.token_service.issue_for(&account)
    }

    /// Exchange email and password for a token
    ///
    /// Unknown email and wrong password both fail with `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, InternalError> {
        let Some(account) = self.account_store.find_by_email(email).await? else {
            return Err(AccountError::InvalidCredentials.into());
        };

        if !self.credential_hasher.verify(password, &account.password_hash).await? {
            return Err(AccountError::InvalidCredentials.into());
        }

        tracing::debug!("Login succeeded for account {}", account.id);

        self.token_service.issue_for(&account)
    }

    /// Change email and/or password of the account
    ///
    /// An absent or empty value leaves the stored one unchanged. Taking an
    /// email that belongs to another account fails with `DuplicateEmail`.
    pub async fn update_profile(
        &self,
        account_id: &str,
        email: Option<String>,
        password: Option<String>,
    ) -> Result<account::Model, InternalError> {
        let account = self
            .account_store
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AccountError::NotFound(account_id.to_owned()))?;

        let email = email.filter(|e| !e.is_empty() && *e != account.email);
        if let Some(ref new_email) = email {
            if self.account_store.find_by_email(new_email).await?.is_some() {
                return Err(AccountError::DuplicateEmail(new_email.clone()).into());
            }
        }

        let password_hash = match password.filter(|p| !p.is_empty()) {
            Some(password) => Some(self.credential_hasher.hash(&password).await?),
            None => None,
        };

        let updated = self
            .account_store
            .update_credentials(&account.id, email, password_hash)
            .await?;

        tracing::info!("Updated profile of account {}", updated.id);

        Ok(updated)
    }

    pub async fn get_score(&self, account_id: &str) -> Result<account::Model, InternalError> {
        self.account_store
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AccountError::NotFound(account_id.to_owned()).into())
    }

    /// Add `points` (default 0, may be negative) to the account's score
    pub async fn update_score(
        &self,
        account_id: &str,
        points: Option<i64>,
    ) -> Result<account::Model, InternalError> {
        let updated = self
            .account_store
            .add_to_score(account_id, points.unwrap_or(0))
            .await?;

        tracing::debug!("Score of account {} is now {}", updated.id, updated.score);

        Ok(updated)
    }
}
