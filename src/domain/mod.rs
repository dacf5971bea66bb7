//! Domain types for the bookstore inventory.
//!
//! This module provides:
//! - The `Book` stock record persisted by the repository
//! - `NewBook` for validated inserts
//! - `BookPatch` for partial updates where blank input keeps the old value

pub mod book;

pub use book::{Book, BookPatch, NewBook, ValidationError};
