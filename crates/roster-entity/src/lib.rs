//! # roster-entity
//!
//! Domain entity models for Roster. Every struct in this crate represents
//! a database table row. All entities derive `Debug`, `Clone`,
//! `Serialize`, `Deserialize`, and `sqlx::FromRow`.

pub mod student;

pub use student::Student;
