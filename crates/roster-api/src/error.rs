//! Maps domain `AppError` to HTTP responses.
//!
//! Every failed request, whatever the cause, produces the same JSON
//! envelope: `{"status": "Error", "error": <message>}`. Input errors map
//! to 400; everything else, including a lookup for a missing id, maps to
//! 500 — the storage contract does not distinguish "not found" from any
//! other persistence failure.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use roster_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always the literal `"Error"`.
    pub status: String,
    /// Human-readable message.
    pub error: String,
}

impl ErrorResponse {
    /// Build the envelope around a message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: "Error".to_string(),
            error: error.into(),
        }
    }
}

/// Newtype so the axum response mapping can live in this crate.
///
/// Handlers return `Result<_, ApiError>`; the `From<AppError>` impl lets
/// `?` propagate domain errors straight out of a handler.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            _ => {
                tracing::error!(error = %self.0.message, "Internal server error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorResponse::new(self.0.message))).into_response()
    }
}

/// Collapse field validation failures into a single validation error.
///
/// Renders one message per failing field (the message declared on the
/// field's `#[validate]` annotation) and joins them, sorted by field name
/// so the output is deterministic.
pub fn validation_error(errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let messages: Vec<String> = fields
        .into_iter()
        .map(|(field, errs)| {
            errs.first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("field {field} is invalid"))
        })
        .collect();

    AppError::validation(messages.join(", "))
}
