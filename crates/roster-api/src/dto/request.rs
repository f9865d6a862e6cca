//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create student request body.
///
/// Carries the field constraints of the student record: the handler
/// validates this DTO before anything is handed to storage, so no record
/// violating these constraints is ever persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateStudentRequest {
    /// Full name.
    #[validate(length(min = 1, message = "field name is a required field"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "field email must be a valid email address"))]
    pub email: String,
    /// Age in years. Must be strictly positive.
    #[validate(range(min = 1, message = "field age must be greater than zero"))]
    pub age: i64,
}
