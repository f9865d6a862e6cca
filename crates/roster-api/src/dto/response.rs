//! Response DTOs.
//!
//! Success responses carry the raw result value; only errors are wrapped
//! in an envelope (see [`crate::error::ErrorResponse`]). Read endpoints
//! serialize the [`roster_entity::Student`] entity directly.

use serde::{Deserialize, Serialize};

/// Body of a successful create: the generated id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentResponse {
    /// The new student's id.
    pub id: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
