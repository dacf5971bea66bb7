//! CSV export of the catalog.

use std::io;
use std::path::Path;

use tracing::info;

use crate::db::Repository;
use crate::domain::Book;
use crate::error::AppError;

/// Serialize books as CSV with an `id,title,author,quantity` header.
///
/// The header is written explicitly so an empty catalog still produces a
/// well-formed file.
pub fn write_csv<W: io::Write>(books: &[Book], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(["id", "title", "author", "quantity"])?;
    for book in books {
        csv_writer.serialize(book)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Export the full catalog to a CSV file, returning the record count.
pub async fn export_catalog(repo: &Repository, path: &Path) -> Result<usize, AppError> {
    let books = repo.list_books().await?;
    let file = std::fs::File::create(path)?;
    write_csv(&books, file)?;
    info!(records = books.len(), path = %path.display(), "catalog exported");
    Ok(books.len())
}
