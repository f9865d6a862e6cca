//! Student entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A student record.
///
/// Serializes to `{"id": int64, "name": string, "email": string, "age": int}`,
/// which is exactly the wire shape returned by the read endpoints. Field
/// constraints (non-empty name, valid email, positive age) are enforced at
/// the handler layer before any record reaches storage; a persisted
/// `Student` always satisfies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique identifier, assigned by storage on creation. Immutable.
    pub id: i64,
    /// Full name. Never empty once persisted.
    pub name: String,
    /// Email address. Syntactically valid once persisted.
    pub email: String,
    /// Age in years. Strictly positive once persisted.
    pub age: i64,
}
