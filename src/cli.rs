//! Command-line argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bookstock")]
#[command(about = "A bookstore inventory manager.", version)]
pub struct CommandLine {
    /// Path to the SQLite database file (overrides DATABASE_PATH)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// With no subcommand, the interactive shell starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the full catalog as a table
    #[command(alias = "ls")]
    List,
    /// Export the catalog to a CSV file
    Export { path: PathBuf },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
