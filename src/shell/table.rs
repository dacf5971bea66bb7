//! Table rendering for catalog and selection views.

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};

use crate::domain::Book;

fn base_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// Render books with their database ids, for search and list views.
pub fn catalog_table(books: &[Book]) -> String {
    let mut table = base_table(vec!["Id", "Title", "Author", "Stock"]);
    for book in books {
        table.add_row(vec![
            book.id.to_string(),
            book.title.clone(),
            book.author.clone(),
            book.quantity.to_string(),
        ]);
    }
    table.to_string()
}

/// Render books with 1-based row numbers, for pick-one prompts.
pub fn selection_table(books: &[Book]) -> String {
    let mut table = base_table(vec!["#", "Title", "Author", "Stock"]);
    for (index, book) in books.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            book.title.clone(),
            book.author.clone(),
            book.quantity.to_string(),
        ]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Book> {
        vec![
            Book {
                id: 3001,
                title: "A Tale of Two Cities".to_string(),
                author: "Charles Dickens".to_string(),
                quantity: 30,
            },
            Book {
                id: 3004,
                title: "The Lord of the Rings".to_string(),
                author: "J. R. R. Tolkien".to_string(),
                quantity: 37,
            },
        ]
    }

    #[test]
    fn catalog_table_shows_ids_and_fields() {
        let rendered = catalog_table(&sample());
        assert!(rendered.contains("Id"));
        assert!(rendered.contains("3001"));
        assert!(rendered.contains("A Tale of Two Cities"));
        assert!(rendered.contains("Charles Dickens"));
        assert!(rendered.contains("37"));
    }

    #[test]
    fn selection_table_numbers_rows_from_one() {
        let rendered = selection_table(&sample());
        assert!(rendered.contains('#'));
        assert!(rendered.contains("1"));
        assert!(rendered.contains("2"));
        assert!(rendered.contains("The Lord of the Rings"));
        // Selection view shows row numbers, not database ids.
        assert!(!rendered.contains("3001"));
    }
}
