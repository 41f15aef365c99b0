mod bootstrap_settings;
mod database;
mod env_provider;
mod errors;
mod logging;
mod secret_config;
mod secret_manager;

pub use bootstrap_settings::BootstrapSettings;
pub use database::{init_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::{ConfigError, SecretError};
pub use logging::{init_logging, LoggingError};
pub use secret_config::{SecretConfig, SecretType};
pub use secret_manager::SecretManager;
