//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods live in submodules by domain:
//! - `books.rs` - stock record CRUD and search

mod books;

use sqlx::sqlite::SqlitePool;

pub use books::escape_like;

/// Repository for stock record operations.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
