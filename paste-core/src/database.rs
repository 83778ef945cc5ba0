//! SQLite database layer for app preferences
//!
//! A single `preferences` table of string keys and string values, the on-device
//! stand-in for a user-defaults store. Uses r2d2 connection pooling so reads
//! from the matcher's worker threads never queue behind the UI thread.

use chrono::Utc;
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Thread-safe database wrapper using connection pooling
///
/// WAL mode lets readers proceed without blocking the writer.
pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open or create a database at the given path with connection pooling
    pub fn open<P: AsRef<Path>>(path: P) -> DatabaseResult<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let manager = SqliteConnectionManager::file(path)
            .with_init(|conn| {
                conn.execute_batch("
                    PRAGMA journal_mode=WAL;
                    PRAGMA synchronous=NORMAL;
                ")?;
                Ok(())
            });

        let pool = Pool::builder()
            .max_size(4)
            .build(manager)?;

        let db = Self { pool };
        db.setup_schema()?;
        Ok(db)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> DatabaseResult<Self> {
        let manager = SqliteConnectionManager::memory();

        // In-memory needs single connection to maintain state
        let pool = Pool::builder()
            .max_size(1)
            .build(manager)?;

        let db = Self { pool };
        db.setup_schema()?;
        Ok(db)
    }

    /// Get a connection from the pool
    fn get_conn(&self) -> DatabaseResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    fn setup_schema(&self) -> DatabaseResult<()> {
        let conn = self.get_conn()?;
        conn.execute_batch(r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updatedAt TEXT NOT NULL
            );
        "#)?;
        Ok(())
    }

    /// Read the value stored under `key`
    pub fn get_preference(&self, key: &str) -> DatabaseResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Insert or replace the value stored under `key`
    pub fn set_preference(&self, key: &str, value: &str) -> DatabaseResult<()> {
        let conn = self.get_conn()?;
        let timestamp_str = Utc::now().format("%Y-%m-%d %H:%M:%S%.f").to_string();
        conn.execute(
            "INSERT INTO preferences (key, value, updatedAt) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updatedAt = excluded.updatedAt",
            params![key, value, timestamp_str],
        )?;
        Ok(())
    }

    pub fn remove_preference(&self, key: &str) -> DatabaseResult<()> {
        let conn = self.get_conn()?;
        conn.execute("DELETE FROM preferences WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// Get the database size in bytes
    pub fn database_size(&self) -> DatabaseResult<i64> {
        let conn = self.get_conn()?;
        let page_count: i64 = conn.query_row("PRAGMA page_count", [], |row| row.get(0))?;
        let page_size: i64 = conn.query_row("PRAGMA page_size", [], |row| row.get(0))?;
        Ok(page_count * page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_preference("recents").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let db = Database::open_in_memory().unwrap();
        db.set_preference("recents", "first").unwrap();
        db.set_preference("recents", "second").unwrap();
        assert_eq!(db.get_preference("recents").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_preference() {
        let db = Database::open_in_memory().unwrap();
        db.set_preference("recents", "value").unwrap();
        db.remove_preference("recents").unwrap();
        assert_eq!(db.get_preference("recents").unwrap(), None);

        // Removing an absent key is not an error
        db.remove_preference("recents").unwrap();
    }

    #[test]
    fn test_keys_are_independent() {
        let db = Database::open_in_memory().unwrap();
        db.set_preference("a", "1").unwrap();
        db.set_preference("b", "2").unwrap();
        assert_eq!(db.get_preference("a").unwrap().as_deref(), Some("1"));
        assert_eq!(db.get_preference("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn test_database_size_nonzero() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.database_size().unwrap() > 0);
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("paste.sqlite");
        let db = Database::open(&path).unwrap();
        db.set_preference("k", "v").unwrap();
        assert!(path.exists());
    }
}
