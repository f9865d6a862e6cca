//! Application builder — wires router + middleware + state into an Axum app.

use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use roster_core::config::AppConfig;
use roster_core::error::AppError;
use roster_database::StudentStore;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}

/// Runs the Roster server until the `shutdown` future resolves.
///
/// Once `shutdown` resolves, in-flight requests get the configured grace
/// period to drain before the server is abandoned.
pub async fn run_server(
    config: AppConfig,
    store: Arc<dyn StudentStore>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let addr = config.server.addr();

    let state = AppState {
        config: Arc::new(config),
        store,
    };
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Roster server listening on {addr}");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .into_future(),
    );

    shutdown.await;
    tracing::info!("Shutdown signal received, draining connections...");
    let _ = shutdown_tx.send(true);

    match tokio::time::timeout(grace, server).await {
        Ok(Ok(Ok(()))) => {
            tracing::info!("Roster server shut down gracefully");
            Ok(())
        }
        Ok(Ok(Err(e))) => Err(AppError::internal(format!("Server error: {e}"))),
        Ok(Err(e)) => Err(AppError::internal(format!("Server task panicked: {e}"))),
        Err(_) => {
            tracing::warn!("Shutdown grace period expired, abandoning open connections");
            Ok(())
        }
    }
}
