// Common test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use sea_orm::{Database, DatabaseConnection};
use migration::{AccountMigrator, MigratorTrait};
use poem::Endpoint;
use poem::test::TestClient;
use scorekeeper_backend::api::build_routes;
use scorekeeper_backend::app_data::AppData;
use scorekeeper_backend::config::{EnvironmentProvider, SecretManager};
use scorekeeper_backend::services::CredentialHasher;

pub const TEST_JWT_SECRET: &str = "integration-secret-key-minimum-32-characters";

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

/// Fixed set of variables standing in for the process environment
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl EnvironmentProvider for StaticEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Creates AppData over a fresh database with a cheap bcrypt cost
pub async fn setup_test_app_data(jwt_expiration_minutes: Option<i64>) -> AppData {
    let db = setup_test_db().await;
    let secret_manager = SecretManager::from_env_provider(&StaticEnvironment::new(&[(
        "JWT_SECRET",
        TEST_JWT_SECRET,
    )]))
    .expect("Failed to load test secrets");

    AppData::new(db, secret_manager, CredentialHasher::with_cost(4), jwt_expiration_minutes)
}

/// Creates a test client for the full HTTP application
///
/// Returns (client, app_data) so tests can inspect the store directly.
pub async fn setup_test_client() -> (TestClient<impl Endpoint>, AppData) {
    let app_data = setup_test_app_data(None).await;
    let client = TestClient::new(build_routes(&app_data, "http://localhost:3000/api-v1"));
    (client, app_data)
}

/// Helper to manage environment variables in tests
///
/// Cleans up specified environment variables on creation and drop,
/// ensuring test isolation when dealing with global environment state.
pub struct EnvGuard {
    vars: Vec<String>,
}

impl EnvGuard {
    pub fn new(vars: Vec<&str>) -> Self {
        for var in &vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
        Self {
            vars: vars.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for var in &self.vars {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }
}

/// Global mutex for tests that modify environment variables
///
/// Environment variables are process-global, so tests that modify them
/// must run serially to avoid race conditions.
pub static ENV_TEST_MUTEX: Mutex<()> = Mutex::new(());
