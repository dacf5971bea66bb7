//! The book stock record and its validation rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("author must not be empty")]
    EmptyAuthor,
    #[error("quantity must not be negative, got {0}")]
    NegativeQuantity(i64),
}

/// A single book's inventory entry as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Row id, assigned by SQLite on insert.
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Number of copies in stock, never negative.
    pub quantity: i64,
}

/// A validated book waiting to be inserted; the database assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub quantity: i64,
}

impl NewBook {
    /// Validate and normalize the fields of a book before insert.
    ///
    /// Title and author are trimmed and must be non-empty; quantity must be
    /// non-negative.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        quantity: i64,
    ) -> Result<Self, ValidationError> {
        let title = title.into().trim().to_string();
        let author = author.into().trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        if quantity < 0 {
            return Err(ValidationError::NegativeQuantity(quantity));
        }
        Ok(NewBook {
            title,
            author,
            quantity,
        })
    }
}

/// Partial update for a book; `None` fields keep the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub quantity: Option<i64>,
}

impl BookPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.quantity.is_none()
    }
}

impl Book {
    /// Apply a patch, producing the updated record after validation.
    pub fn with_patch(&self, patch: BookPatch) -> Result<Book, ValidationError> {
        let title = match patch.title {
            Some(t) => {
                let t = t.trim().to_string();
                if t.is_empty() {
                    return Err(ValidationError::EmptyTitle);
                }
                t
            }
            None => self.title.clone(),
        };
        let author = match patch.author {
            Some(a) => {
                let a = a.trim().to_string();
                if a.is_empty() {
                    return Err(ValidationError::EmptyAuthor);
                }
                a
            }
            None => self.author.clone(),
        };
        let quantity = match patch.quantity {
            Some(q) if q < 0 => return Err(ValidationError::NegativeQuantity(q)),
            Some(q) => q,
            None => self.quantity,
        };
        Ok(Book {
            id: self.id,
            title,
            author,
            quantity,
        })
    }
}
