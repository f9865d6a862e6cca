//! The storage contract the HTTP layer depends on.

use async_trait::async_trait;

use roster_core::result::AppResult;
use roster_entity::Student;

/// Abstract persistence operations for student records.
///
/// The HTTP layer holds an `Arc<dyn StudentStore>` and never sees the
/// concrete database, so tests can substitute any implementation. The
/// contract deliberately exposes no distinct "not found" error: a lookup,
/// update, or delete against a missing id fails with the same generic
/// database error as any other persistence failure.
#[async_trait]
pub trait StudentStore: Send + Sync + 'static {
    /// Persist a new record and return the generated id.
    ///
    /// Callers validate the fields before this is invoked; the store
    /// persists whatever it is given in a single atomic write.
    async fn create_student(&self, name: &str, email: &str, age: i64) -> AppResult<i64>;

    /// Return the record with the given id.
    async fn get_student_by_id(&self, id: i64) -> AppResult<Student>;

    /// Return all records in insertion (id) order.
    async fn get_students(&self) -> AppResult<Vec<Student>>;

    /// Replace the record identified by `student.id`.
    async fn update_student(&self, student: &Student) -> AppResult<()>;

    /// Remove the record with the given id.
    async fn delete_student(&self, id: i64) -> AppResult<()>;
}
