use clap::Parser;
use poem::{listener::TcpListener, Server};
use scorekeeper_backend::api::build_routes;
use scorekeeper_backend::app_data::AppData;
use scorekeeper_backend::cli::{self, Cli, Commands};
use scorekeeper_backend::config::{init_database, init_logging, migrate_database, BootstrapSettings};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let args = Cli::parse();
    let settings = BootstrapSettings::from_env()?;

    match args.command() {
        Commands::Migrate => cli::migrate::run_migrations(&settings).await,
        Commands::Serve => serve(&settings).await,
    }
}

async fn serve(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    let db = init_database(settings).await?;
    migrate_database(&db).await?;

    let app_data = AppData::init(db, settings).map_err(|e| {
        tracing::error!("Refusing to start: {}", e);
        e
    })?;

    let address = settings.server_address();
    let public_url = format!("http://localhost:{}", settings.server_port());
    let app = build_routes(&app_data, &format!("{}/api-v1", public_url));

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at {}/swagger", public_url);
    tracing::info!("API endpoints available at {}/api-v1", public_url);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}
