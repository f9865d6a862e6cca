//! Application state shared across all handlers.

use std::sync::Arc;

use roster_core::config::AppConfig;
use roster_database::StudentStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Handlers keep no
/// state of their own between requests; the store is the only shared
/// resource, and its concurrency safety is the adapter's concern.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// The storage contract implementation.
    pub store: Arc<dyn StudentStore>,
}
