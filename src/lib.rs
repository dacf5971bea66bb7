pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod export;
pub mod shell;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{Book, BookPatch, NewBook, ValidationError};
pub use error::AppError;
pub use shell::Shell;
