//! User storage for the user directory
//!
//! This crate provides a storage abstraction for users. It ships an in-memory
//! store (for tests and throwaway instances) and a SQLite store backed by a
//! sqlx connection pool.

mod error;
mod memory;
mod sqlite;
mod store;

pub use error::*;
pub use memory::*;
pub use sqlite::*;
pub use store::*;
