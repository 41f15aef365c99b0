use std::sync::Arc;
use sea_orm::DatabaseConnection;
use crate::config::{BootstrapSettings, ConfigError, SecretManager};
use crate::services::{AccountService, CredentialHasher, TokenService};
use crate::stores::AccountStore;

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared with the API.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ↓ creates once
///   ├─ db (DatabaseConnection)
///   ├─ secret_manager (Arc<SecretManager>)
///   ├─ credential_hasher (Arc<CredentialHasher>)
///   ├─ token_service (Arc<TokenService>)      ← signing secret injected here
///   ├─ account_store (Arc<AccountStore>)
///   └─ account_service (Arc<AccountService>)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub secret_manager: Arc<SecretManager>,
    pub credential_hasher: Arc<CredentialHasher>,
    pub token_service: Arc<TokenService>,
    pub account_store: Arc<AccountStore>,
    pub account_service: Arc<AccountService>,
}

impl AppData {
    /// Initialize all application data from the process environment
    ///
    /// The database should be connected and migrated before calling this.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required secret is missing or invalid
    pub fn init(db: DatabaseConnection, settings: &BootstrapSettings) -> Result<Self, ConfigError> {
        tracing::info!("Initializing AppData...");

        tracing::debug!("Initializing secret manager...");
        let secret_manager = SecretManager::init()?;
        tracing::debug!("Secret manager initialized");

        let app_data = Self::new(
            db,
            secret_manager,
            CredentialHasher::new(),
            settings.jwt_expiration_minutes(),
        );

        tracing::info!("AppData initialization complete");

        Ok(app_data)
    }

    /// Wire all components from already loaded parts
    pub fn new(
        db: DatabaseConnection,
        secret_manager: SecretManager,
        credential_hasher: CredentialHasher,
        jwt_expiration_minutes: Option<i64>,
    ) -> Self {
        let secret_manager = Arc::new(secret_manager);
        let credential_hasher = Arc::new(credential_hasher);

        let token_service = Arc::new(
            TokenService::new(secret_manager.jwt_secret().to_string())
                .with_expiration(jwt_expiration_minutes),
        );
        tracing::debug!("{}", token_service);

        let account_store = Arc::new(AccountStore::new(db.clone()));

        let account_service = Arc::new(AccountService::new(
            account_store.clone(),
            credential_hasher.clone(),
            token_service.clone(),
        ));

        Self {
            db,
            secret_manager,
            credential_hasher,
            token_service,
            account_store,
            account_service,
        }
    }
}
