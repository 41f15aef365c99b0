use sea_orm::{Database, DatabaseConnection};
use migration::{AccountMigrator, MigratorTrait};
use crate::config::BootstrapSettings;
use crate::errors::InternalError;

/// Initialize the account database connection
///
/// Does NOT run migrations - call `migrate_database()` separately.
pub async fn init_database(settings: &BootstrapSettings) -> Result<DatabaseConnection, InternalError> {
    let database_url = settings.database_url();

    let db = Database::connect(database_url)
        .await
        .map_err(|e| InternalError::database("connect_database", e))?;

    tracing::debug!("Connected to database: {}", database_url);

    Ok(db)
}

/// Run all pending migrations on the account database
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    AccountMigrator::up(db, None)
        .await
        .map_err(|e| InternalError::database("run_migrations", e))?;

    tracing::debug!("Database migrations completed");

    Ok(())
}
