// Test utilities shared across unit tests
// Only compiled when running tests

use sea_orm::{Database, DatabaseConnection};
use migration::{AccountMigrator, MigratorTrait};
use crate::services::{AccountService, CredentialHasher, TokenService};
use crate::stores::AccountStore;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";

/// Creates an in-memory account database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    AccountMigrator::up(&db, None)
        .await
        .expect("Failed to run account migrations");

    db
}

/// Lowest bcrypt cost, so tests do not spend seconds hashing
pub fn test_hasher() -> Arc<CredentialHasher> {
    Arc::new(CredentialHasher::with_cost(4))
}

pub fn test_token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new(TEST_JWT_SECRET.to_string()))
}

/// Creates the full service stack over a fresh database
///
/// Returns (account_store, token_service, account_service)
pub async fn setup_test_services() -> (Arc<AccountStore>, Arc<TokenService>, Arc<AccountService>) {
    let db = setup_test_db().await;
    let account_store = Arc::new(AccountStore::new(db));
    let token_service = test_token_service();
    let account_service = Arc::new(AccountService::new(
        account_store.clone(),
        test_hasher(),
        token_service.clone(),
    ));

    (account_store, token_service, account_service)
}
