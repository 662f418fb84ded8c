use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;
use tokio::signal;

use paper_atlas::api::{self, papers::PapersState};
use paper_atlas::cli::Cli;
use paper_atlas::config::Config;
use paper_atlas::db::Database;
use paper_atlas::error::AppError;
use paper_atlas::logging::init_logging;
use paper_atlas::repository::EntryRepository;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();
    let config = Config::from_env()
        .map(|config| config.apply_cli(cli))
        .map_err(AppError::Config)
        .unwrap_or_else(|err| {
            tracing::error!("{}", err);
            std::process::exit(1);
        });

    tracing::info!("Service starting with config: {:?}", config);

    if let Err(err) = run(config).await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), AppError> {
    let db = Database::new(&config.database_path);
    if !db.path().exists() {
        tracing::warn!(
            "Database file {} not found; data routes will fail until it exists",
            db.path().display()
        );
    }

    let store: PapersState = Arc::new(EntryRepository::new(db));
    let cors = api::cors_layer(&config.allowed_origins)?;
    let app = api::build_router(store, &config.static_dir, cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received. Stopping server.");
}
