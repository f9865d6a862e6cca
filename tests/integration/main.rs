//! HTTP integration tests driving the full router against an in-memory
//! SQLite store.

mod helpers;

mod student_test;
