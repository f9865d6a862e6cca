//! Roster Server — student records CRUD service.
//!
//! Main entry point that wires the crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use roster_core::config::AppConfig;
use roster_core::error::AppError;
use roster_database::repositories::StudentRepository;

#[tokio::main]
async fn main() {
    let env = std::env::var("ROSTER_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        env = %config.env,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Roster"
    );

    create_data_directory(&config).await?;

    tracing::info!("Connecting to database...");
    let pool = roster_database::connection::create_pool(&config.database).await?;

    roster_database::migration::run_migrations(&pool).await?;

    let store = Arc::new(StudentRepository::new(pool));
    tracing::info!(env = %config.env, "storage initialized");

    roster_api::run_server(config, store, shutdown_signal()).await
}

/// Create the directory holding the SQLite file, if the URL points at one.
async fn create_data_directory(config: &AppConfig) -> Result<(), AppError> {
    let path = config.database.url.trim_start_matches("sqlite://");
    if path.contains(":memory:") {
        return Ok(());
    }
    if let Some(dir) = std::path::Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(dir).await.map_err(|e| {
                AppError::internal(format!("Failed to create dir '{}': {}", dir.display(), e))
            })?;
        }
    }
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
