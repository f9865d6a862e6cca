//! # roster-core
//!
//! Core crate for the Roster student records service. Contains the
//! configuration schemas and the unified error system.
//!
//! This crate has **no** internal dependencies on other Roster crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
