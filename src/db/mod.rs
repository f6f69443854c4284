// src/db/mod.rs

//! Database layer for the recipe catalog
//!
//! All state lives in a single SQLite file. Callers open a connection per
//! unit of work and run mutations inside [`transaction`].

pub mod models;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction};
use std::path::Path;
use tracing::{debug, info};

/// Open an existing database with foreign key enforcement enabled
pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Connection> {
    let db_path = db_path.as_ref();
    debug!("Opening database at {}", db_path.display());

    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    Ok(conn)
}

/// Create the database (and its parent directory) and apply migrations
pub fn init<P: AsRef<Path>>(db_path: P) -> Result<()> {
    let db_path = db_path.as_ref();

    let parent = db_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty() && !p.exists());
    if let Some(parent) = parent {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::IoError(format!(
                "Failed to create database directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let conn = open(db_path)?;
    schema::migrate(&conn)?;
    info!("Database ready at {}", db_path.display());
    Ok(())
}

/// Run `f` inside a transaction, committing on success and rolling back on error
pub fn transaction<F, T>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    // Dropping an uncommitted transaction rolls it back
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/dir/larder.db");

        init(&db_path).unwrap();
        assert!(db_path.exists());

        let conn = open(&db_path).unwrap();
        assert_eq!(
            schema::get_schema_version(&conn).unwrap(),
            schema::SCHEMA_VERSION
        );
    }

    #[test]
    fn test_init_reports_unwritable_directory() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let result = init(blocker.join("larder.db").join("x.db"));
        assert!(matches!(result, Err(Error::IoError(_))));
    }

    #[test]
    fn test_init_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("larder.db");

        init(&db_path).unwrap();
        init(&db_path).unwrap();
    }

    #[test]
    fn test_transaction_rolls_back_on_error() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("larder.db");
        init(&db_path).unwrap();
        let mut conn = open(&db_path).unwrap();

        let result: Result<()> = transaction(&mut conn, |tx| {
            tx.execute(
                "INSERT INTO recipes (name, description) VALUES ('Toast', '')",
                [],
            )?;
            Err(Error::NotFoundError("forced".to_string()))
        });
        assert!(result.is_err());

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM recipes", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("larder.db");
        init(&db_path).unwrap();
        let conn = open(&db_path).unwrap();

        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
