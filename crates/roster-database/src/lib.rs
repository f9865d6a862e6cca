//! # roster-database
//!
//! SQLite connection management, the [`store::StudentStore`] storage
//! contract, and the concrete repository implementation for Roster.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use store::StudentStore;
