//! Concrete repository implementations.

pub mod student;

pub use student::StudentRepository;
