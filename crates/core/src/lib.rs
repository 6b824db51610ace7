//! Functional core of the portfolio site.
//!
//! Pure data types, validation and the storage contract. Nothing in this
//! crate performs I/O; the server crate provides the concrete repository.

pub mod project;
pub mod storage;
