//! Route definitions for the Roster HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(student_routes()).merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Student endpoints: create, get by id, list.
///
/// Update and delete exist on the storage contract but have no HTTP entry
/// point.
fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/student", post(handlers::student::create_student))
        .route("/student/{id}", get(handlers::student::get_student_by_id))
        .route("/students", get(handlers::student::list_students))
}

/// Health check endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
