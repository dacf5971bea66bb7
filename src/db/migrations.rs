//! Database initialization, migrations, and first-run catalog seeding.

use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::info;

/// Catalog installed when the books table is created empty and seeding is on.
///
/// Ids start at 3001 so hand-entered rows are visibly distinct from the seed.
const SEED_CATALOG: &[(i64, &str, &str, i64)] = &[
    (3001, "A Tale of Two Cities", "Charles Dickens", 30),
    (
        3002,
        "Harry Potter and the Philosopher's Stone",
        "J. K. Rowling",
        40,
    ),
    (
        3003,
        "The Lion, the Witch, and the Wardrobe",
        "C. S. Lewis",
        25,
    ),
    (3004, "The Lord of the Rings", "J. R. R. Tolkien", 37),
    (3005, "Alice in Wonderland", "Lewis Carroll", 12),
];

/// Initialize the SQLite database with schema, pragmas, and optional seed data.
pub async fn init_db(db_path: &str, seed_catalog: bool) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await?;

    run_migrations(&pool).await?;

    if seed_catalog {
        seed_initial_catalog(&pool).await?;
    }

    info!("Database initialized at {}", db_path);
    Ok(pool)
}

/// Run all database migrations. Safe to call on an existing database.
pub(crate) async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }

    Ok(())
}

/// Insert the seed catalog, but only into an empty books table.
async fn seed_initial_catalog(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    let now = chrono::Utc::now().timestamp_millis();
    let mut tx = pool.begin().await?;
    for (id, title, author, quantity) in SEED_CATALOG {
        sqlx::query(
            r#"
            INSERT INTO books (id, title, author, quantity, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(author)
        .bind(quantity)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    info!("Seeded {} catalog entries", SEED_CATALOG.len());
    Ok(())
}

/// Configure SQLite pragmas for reliability on a local single-user database.
async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await?;

    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let _journal_mode: String = row.get(0);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn db_path(temp_dir: &TempDir) -> String {
        temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string()
    }

    #[tokio::test]
    async fn test_init_db_creates_database() {
        let temp_dir = TempDir::new().unwrap();
        let path = db_path(&temp_dir);

        let pool = init_db(&path, false).await.expect("init_db failed");
        assert!(Path::new(&path).exists());

        let result: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);
    }

    #[tokio::test]
    async fn test_migrations_create_books_table() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&db_path(&temp_dir), false)
            .await
            .expect("init_db failed");

        let result: (String,) =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' AND name='books'")
                .fetch_one(&pool)
                .await
                .expect("query failed");
        assert_eq!(result.0, "books");
    }

    #[tokio::test]
    async fn test_migrations_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&db_path(&temp_dir), false)
            .await
            .expect("init_db failed");

        run_migrations(&pool)
            .await
            .expect("second migration run failed");

        let result: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM sqlite_master WHERE type='table'")
                .fetch_one(&pool)
                .await
                .expect("query failed");
        assert!(result.0 > 0);
    }

    #[tokio::test]
    async fn test_seed_installs_catalog_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = db_path(&temp_dir);
        let pool = init_db(&path, true).await.expect("init_db failed");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(count, 5);

        // Reopening the same database must not duplicate the catalog.
        drop(pool);
        let pool = init_db(&path, true).await.expect("reopen failed");
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(count, 5);
    }

    #[tokio::test]
    async fn test_seed_skipped_when_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&db_path(&temp_dir), false)
            .await
            .expect("init_db failed");

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_seed_skipped_on_populated_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = db_path(&temp_dir);
        let pool = init_db(&path, false).await.expect("init_db failed");

        sqlx::query(
            "INSERT INTO books (title, author, quantity, created_at, updated_at) \
             VALUES ('Dune', 'Frank Herbert', 1, 0, 0)",
        )
        .execute(&pool)
        .await
        .expect("insert failed");

        drop(pool);
        let pool = init_db(&path, true).await.expect("reopen failed");
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(count, 1, "existing data must suppress seeding");
    }

    #[tokio::test]
    async fn test_pragmas_configured() {
        let temp_dir = TempDir::new().unwrap();
        let pool = init_db(&db_path(&temp_dir), false)
            .await
            .expect("init_db failed");

        let result: (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        assert_eq!(result.0, 1);

        let result: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool)
            .await
            .expect("query failed");
        // `journal_mode=WAL` is best-effort; SQLite can fall back depending on environment.
        assert!(
            matches!(result.0.as_str(), "wal" | "delete"),
            "unexpected journal_mode: {}",
            result.0
        );
    }
}
