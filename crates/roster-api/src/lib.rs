//! # roster-api
//!
//! HTTP API layer for Roster built on Axum.
//!
//! Provides the student REST endpoints, the health check, DTOs, and the
//! mapping from [`roster_core::AppError`] to the JSON error envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
