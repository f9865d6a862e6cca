//! Student domain entity.

pub mod model;

pub use model::Student;
