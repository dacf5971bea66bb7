//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization, migrations, and first-run seeding
//! - SQLite pragma configuration
//! - Repository layer for stock record operations

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::Repository;
