//! Student CRUD handlers.
//!
//! Each handler is a pure function of one request to one response; nothing
//! persists between invocations beyond what the store provides. Every
//! error is turned into the JSON envelope at this boundary — nothing
//! propagates past the HTTP response.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use roster_core::error::AppError;
use roster_entity::Student;

use crate::dto::request::CreateStudentRequest;
use crate::dto::response::CreateStudentResponse;
use crate::error::{ApiError, validation_error};
use crate::state::AppState;

/// POST /api/student
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that an empty body and a malformed one produce the standard envelope
/// with distinct messages.
pub async fn create_student(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateStudentResponse>), ApiError> {
    tracing::info!("creating a student");

    if body.is_empty() {
        return Err(AppError::validation("empty body").into());
    }

    let request: CreateStudentRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::validation(format!("invalid request body: {e}")))?;

    request.validate().map_err(|e| validation_error(&e))?;

    let id = state
        .store
        .create_student(&request.name, &request.email, request.age)
        .await?;

    tracing::info!(id, "student created");
    Ok((StatusCode::CREATED, Json(CreateStudentResponse { id })))
}

/// GET /api/student/{id}
pub async fn get_student_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Student>, ApiError> {
    tracing::info!(id = %id, "getting a student by id");

    let id: i64 = id
        .parse()
        .map_err(|e| AppError::validation(format!("invalid student id '{id}': {e}")))?;

    let student = state.store.get_student_by_id(id).await?;
    Ok(Json(student))
}

/// GET /api/students
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state.store.get_students().await?;
    Ok(Json(students))
}
