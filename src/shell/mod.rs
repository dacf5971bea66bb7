//! Interactive console shell for the inventory.
//!
//! This module provides:
//! - `Console`, a prompt/response layer over any `BufRead` + `Write` pair
//! - Table rendering for catalog and selection views
//! - `Shell`, the main menu loop wiring prompts to the repository

pub mod console;
pub mod table;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::db::Repository;
use crate::domain::{Book, BookPatch, NewBook};
use crate::error::AppError;
use crate::export;
use console::Console;

const MENU: &str = "\
Please choose an option:
  1. Enter book
  2. Update book
  3. Delete book
  4. Search books
  5. List all books
  6. Export to CSV
  0. Exit";

/// The interactive inventory shell.
///
/// Generic over its input and output streams so whole sessions can be
/// scripted in tests.
pub struct Shell<'a, R, W> {
    repo: &'a Repository,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(repo: &'a Repository, input: R, output: W) -> Self {
        Shell {
            repo,
            console: Console::new(input, output),
        }
    }

    /// Run the menu loop until the user exits or input reaches EOF.
    pub async fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.console.say(MENU)?;
            let Some(choice) = self.console.prompt_line("> ")? else {
                return Ok(());
            };
            match choice.trim() {
                "1" => self.add_books().await?,
                "2" => self.update_book().await?,
                "3" => self.delete_book().await?,
                "4" => self.search_books().await?,
                "5" => self.list_books().await?,
                "6" => self.export_csv().await?,
                "0" => return Ok(()),
                _ => self.console.say("Invalid choice, please try again.")?,
            }
            self.console.say("")?;
        }
    }

    /// Add new books until the user declines to continue.
    async fn add_books(&mut self) -> Result<(), AppError> {
        self.console.say("-- Add new books --\n")?;

        loop {
            self.console.say("Please enter the book details:")?;
            let Some(title) = self.console.prompt_non_empty("Title: ")? else {
                return Ok(());
            };
            let Some(author) = self.console.prompt_non_empty("Author: ")? else {
                return Ok(());
            };
            let Some(quantity) = self.console.prompt_quantity("Number in stock: ")? else {
                return Ok(());
            };

            let new_book = NewBook::new(title, author, quantity)?;
            let book = self.repo.insert_book(&new_book).await?;
            debug!(id = book.id, "book inserted");
            self.console.say(&format!("Saved as #{}.\n", book.id))?;

            if !self.console.confirm("Add another? Y/N ")? {
                return Ok(());
            }
        }
    }

    /// Search for and update a book, blank input keeping existing values.
    async fn update_book(&mut self) -> Result<(), AppError> {
        self.console.say("-- Update --")?;
        self.console.say("Search for the book to be updated")?;

        let matches = self.query_for_books().await?;
        if matches.is_empty() {
            return Ok(());
        }
        let Some(book) = self.select_book_from_list(&matches)? else {
            return Ok(());
        };

        let Some(new_title) = self
            .console
            .prompt_line("Enter the new title, or blank to skip: ")?
        else {
            return Ok(());
        };
        let Some(new_author) = self
            .console
            .prompt_line("Enter the new author, or blank to skip: ")?
        else {
            return Ok(());
        };
        let Some(new_quantity) = self
            .console
            .prompt_optional_quantity("Enter the new stock level, or blank to skip: ")?
        else {
            return Ok(());
        };

        let patch = BookPatch {
            title: Some(new_title).filter(|t| !t.trim().is_empty()),
            author: Some(new_author).filter(|a| !a.trim().is_empty()),
            quantity: new_quantity,
        };
        if patch.is_empty() {
            self.console.say("Nothing to change.")?;
            return Ok(());
        }

        let updated = book.with_patch(patch)?;
        if self.repo.update_book(&updated).await? {
            debug!(id = updated.id, "book updated");
            self.console.say("Updated.")?;
        } else {
            self.console.say("That book no longer exists.")?;
        }
        Ok(())
    }

    /// Search for and delete a book, with confirmation.
    async fn delete_book(&mut self) -> Result<(), AppError> {
        self.console.say("-- Delete --")?;
        self.console.say("Search for the book to be deleted")?;

        let matches = self.query_for_books().await?;
        if matches.is_empty() {
            return Ok(());
        }
        let Some(book) = self.select_book_from_list(&matches)? else {
            return Ok(());
        };

        let prompt = format!("Delete \"{}\" by {}? Y/N ", book.title, book.author);
        if !self.console.confirm(&prompt)? {
            self.console.say("Kept.")?;
            return Ok(());
        }

        if self.repo.delete_book(book.id).await? {
            debug!(id = book.id, "book deleted");
            self.console.say("Deleted.")?;
        } else {
            self.console.say("That book no longer exists.")?;
        }
        Ok(())
    }

    /// One-shot search printing the match count and a result table.
    async fn search_books(&mut self) -> Result<(), AppError> {
        self.console.say("-- Search --")?;
        let Some(query) = self.console.prompt_line("Query (title or author): ")? else {
            return Ok(());
        };

        let matches = self.repo.search_books(&query).await?;
        self.console.say(&format!("{} result(s)\n", matches.len()))?;
        if !matches.is_empty() {
            self.console.say(&table::catalog_table(&matches))?;
        }
        Ok(())
    }

    /// Print the full catalog.
    async fn list_books(&mut self) -> Result<(), AppError> {
        let books = self.repo.list_books().await?;
        if books.is_empty() {
            self.console.say("The catalog is empty.")?;
        } else {
            self.console.say(&table::catalog_table(&books))?;
        }
        Ok(())
    }

    /// Export the full catalog to a CSV file.
    async fn export_csv(&mut self) -> Result<(), AppError> {
        let Some(path) = self.console.prompt_non_empty("Output file path: ")? else {
            return Ok(());
        };
        let written = export::export_catalog(self.repo, std::path::Path::new(&path)).await?;
        self.console
            .say(&format!("Wrote {} record(s) to {}.", written, path))?;
        Ok(())
    }

    /// Ask for a query and search until there are matches or the user gives up.
    ///
    /// Returns an empty list when the user declines to search again or input
    /// reaches EOF.
    async fn query_for_books(&mut self) -> Result<Vec<Book>, AppError> {
        loop {
            let Some(query) = self.console.prompt_line("Query (title or author): ")? else {
                return Ok(Vec::new());
            };

            let matches = self.repo.search_books(&query).await?;
            if !matches.is_empty() {
                return Ok(matches);
            }

            if !self.console.confirm("No matches, try again? Y/N ")? {
                return Ok(Vec::new());
            }
        }
    }

    /// Display a numbered table of books and ask the user to pick one.
    ///
    /// Re-prompts on out-of-range numbers; returns None on EOF.
    fn select_book_from_list<'b>(
        &mut self,
        books: &'b [Book],
    ) -> Result<Option<&'b Book>, AppError> {
        self.console.say(&table::selection_table(books))?;

        loop {
            let Some(number) = self.console.prompt_integer("Enter the number of the book: ")?
            else {
                return Ok(None);
            };
            if number < 1 || number > books.len() as i64 {
                self.console
                    .say(&format!("'{}' is not a valid choice, out of range.", number))?;
            } else {
                return Ok(Some(&books[(number - 1) as usize]));
            }
        }
    }
}
