use std::io;

use bookstock::cli::{CommandLine, Commands};
use bookstock::shell::table;
use bookstock::{export, Config, Repository, Shell};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Log to stderr so tables on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let command_line = CommandLine::parse_args();

    let mut config = Config::from_env()?;
    if let Some(database) = command_line.database {
        config.database_path = database;
    }

    let pool = bookstock::init_db(&config.database_path, config.seed_catalog).await?;
    let repo = Repository::new(pool);

    match command_line.command {
        Some(Commands::List) => {
            let books = repo.list_books().await?;
            if books.is_empty() {
                println!("The catalog is empty.");
            } else {
                println!("{}", table::catalog_table(&books));
            }
        }
        Some(Commands::Export { path }) => {
            let written = export::export_catalog(&repo, &path).await?;
            println!("Wrote {} record(s) to {}.", written, path.display());
        }
        None => {
            let stdin = io::stdin();
            let mut shell = Shell::new(&repo, stdin.lock(), io::stdout());
            shell.run().await?;
        }
    }

    Ok(())
}
