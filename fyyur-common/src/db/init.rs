//! Database initialization
//!
//! Opens the connection pool and creates the venue, artist and show tables
//! when they are missing. Safe to run on every startup.

use crate::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Open the database named by `database_url` and create the schema
///
/// File databases are created if missing (along with their parent
/// directory). In-memory databases get a single pooled connection so that
/// every query sees the same data.
pub async fn init_database(database_url: &str) -> Result<SqlitePool> {
    let in_memory = database_url.contains(":memory:");

    if !in_memory {
        if let Some(parent) = database_file(database_url).and_then(|p| p.parent().map(Path::to_path_buf)) {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(&parent)?;
            }
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| Error::Config(format!("Invalid database URL {}: {}", database_url, e)))?
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = pool_options(in_memory).connect_with(options).await?;

    initialize_schema(&pool).await?;

    info!("Database ready: {}", database_url);
    Ok(pool)
}

/// Pool sizing for file or in-memory databases
///
/// An in-memory database lives only as long as its connection, so that
/// single connection is opened eagerly and never reaped or recycled.
fn pool_options(in_memory: bool) -> SqlitePoolOptions {
    if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(10)
    }
}

/// Path component of a `sqlite:` URL, without query parameters
fn database_file(database_url: &str) -> Option<&Path> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() {
        None
    } else {
        Some(Path::new(path))
    }
}

/// Create tables if they don't exist
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            address TEXT NOT NULL,
            phone TEXT,
            image_link TEXT,
            facebook_link TEXT,
            website_link TEXT,
            genres TEXT NOT NULL DEFAULT '[]',
            seeking_talent BOOLEAN NOT NULL DEFAULT 0,
            seeking_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT,
            image_link TEXT,
            facebook_link TEXT,
            website_link TEXT,
            genres TEXT NOT NULL DEFAULT '[]',
            seeking_venue BOOLEAN NOT NULL DEFAULT 0,
            seeking_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Deleting a venue or artist removes its shows
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            venue_id INTEGER NOT NULL REFERENCES venues(id) ON DELETE CASCADE,
            artist_id INTEGER NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
            start_time TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_area ON venues(city, state)")
        .execute(pool)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_file_from_url() {
        assert_eq!(
            database_file("sqlite:///var/lib/fyyur/fyyur.db?mode=rwc"),
            Some(Path::new("/var/lib/fyyur/fyyur.db"))
        );
        assert_eq!(database_file("sqlite:fyyur.db"), Some(Path::new("fyyur.db")));
        assert_eq!(database_file("postgres://localhost/fyyur"), None);
    }

    #[test]
    fn test_in_memory_pool_keeps_its_connection() {
        let options = pool_options(true);
        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);

        let file = pool_options(false);
        assert_eq!(file.get_max_connections(), 10);
        assert!(file.get_idle_timeout().is_some());
    }

    #[tokio::test]
    async fn test_in_memory_schema_created() {
        let pool = init_database("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .expect("Failed to list tables");

        assert_eq!(tables, vec!["artists", "shows", "venues"]);

        // Idempotent
        initialize_schema(&pool).await.expect("Second init should succeed");
    }
}
