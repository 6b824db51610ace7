//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `portfolio_core::storage`. Projects live in a single SQLite table.

pub mod sqlite;

pub use sqlite::SqliteRepository;
