//! Stock record operations for the repository.

use sqlx::Row;

use super::Repository;
use crate::domain::{Book, NewBook};

/// Escape `%`, `_`, and `\` in a user query so a `LIKE ... ESCAPE '\'`
/// pattern matches them literally instead of as wildcards.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn book_from_row(row: &sqlx::sqlite::SqliteRow) -> Book {
    Book {
        id: row.get("id"),
        title: row.get("title"),
        author: row.get("author"),
        quantity: row.get("quantity"),
    }
}

impl Repository {
    /// Insert a new book and return the stored record with its assigned id.
    ///
    /// # Errors
    /// Returns an error if the insert fails.
    pub async fn insert_book(&self, new_book: &NewBook) -> Result<Book, sqlx::Error> {
        let now = chrono::Utc::now().timestamp_millis();
        let result = sqlx::query(
            r#"
            INSERT INTO books (title, author, quantity, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_book.title)
        .bind(&new_book.author)
        .bind(new_book.quantity)
        .bind(now)
        .bind(now)
        .execute(self.pool())
        .await?;

        Ok(Book {
            id: result.last_insert_rowid(),
            title: new_book.title.clone(),
            author: new_book.author.clone(),
            quantity: new_book.quantity,
        })
    }

    /// Get a book by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_book(&self, id: i64) -> Result<Option<Book>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author, quantity
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(row.map(|r| book_from_row(&r)))
    }

    /// List the full catalog ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_books(&self) -> Result<Vec<Book>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author, quantity
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.pool())
        .await?;

        Ok(rows.iter().map(book_from_row).collect())
    }

    /// Search for books whose title or author contains the query substring.
    ///
    /// Matching is ASCII-case-insensitive via SQLite `LIKE`; wildcard
    /// characters in the query are matched literally.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn search_books(&self, query: &str) -> Result<Vec<Book>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(query));
        let rows = sqlx::query(
            r#"
            SELECT id, title, author, quantity
            FROM books
            WHERE title LIKE ? ESCAPE '\'
               OR author LIKE ? ESCAPE '\'
            ORDER BY id ASC
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.pool())
        .await?;

        Ok(rows.iter().map(book_from_row).collect())
    }

    /// Update a book's title, author, and quantity by id.
    ///
    /// Returns false if no row with that id exists.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_book(&self, book: &Book) -> Result<bool, sqlx::Error> {
        let now = chrono::Utc::now().timestamp_millis();
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author = ?, quantity = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.quantity)
        .bind(now)
        .bind(book.id)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a book by id. Returns false if no row with that id exists.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_book(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count the stock records in the catalog.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn count_books(&self) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}
