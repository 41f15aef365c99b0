use crate::config::{init_database, migrate_database, BootstrapSettings};

/// Run database migrations for the account database
///
/// Connects and migrates only; secrets are not loaded, so this works before
/// `JWT_SECRET` is configured.
pub async fn run_migrations(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Running database migrations...");

    let db = init_database(settings).await?;
    migrate_database(&db).await?;

    tracing::info!("All migrations completed successfully");

    Ok(())
}
