//! Student repository implementation over SQLite.

use async_trait::async_trait;
use sqlx::SqlitePool;

use roster_core::error::{AppError, ErrorKind};
use roster_core::result::AppResult;
use roster_entity::Student;

use crate::store::StudentStore;

/// Repository for student CRUD operations backed by a SQLite pool.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for StudentRepository {
    async fn create_student(&self, name: &str, email: &str, age: i64) -> AppResult<i64> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(age)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create student", e)
            })?;

        Ok(result.last_insert_rowid())
    }

    async fn get_student_by_id(&self, id: i64) -> AppResult<Student> {
        sqlx::query_as::<_, Student>("SELECT id, name, email, age FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by id", e)
            })?
            .ok_or_else(|| AppError::database(format!("no student found with id {id}")))
    }

    async fn get_students(&self) -> AppResult<Vec<Student>> {
        sqlx::query_as::<_, Student>("SELECT id, name, email, age FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list students", e))
    }

    async fn update_student(&self, student: &Student) -> AppResult<()> {
        let result = sqlx::query("UPDATE students SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.age)
            .bind(student.id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update student", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::database(format!(
                "no student found with id {}",
                student.id
            )));
        }
        Ok(())
    }

    async fn delete_student(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete student", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::database(format!("no student found with id {id}")));
        }
        Ok(())
    }
}
