// src/db/mod.rs

//! SQLite database layer for the recipe catalog
//!
//! All records live in a single SQLite file. The schema is versioned and
//! migrated on `init`; reads open short-lived connections.

pub mod models;
pub mod schema;

pub use models::Recipe;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tracing::debug;

/// Open a connection to the database at `path`
pub fn open(path: impl AsRef<Path>) -> Result<Connection> {
    let conn = Connection::open(path.as_ref())?;
    debug!("Opened database at {:?}", path.as_ref());
    Ok(conn)
}

/// Initialize the database: create the file (and parent directories) and
/// apply any pending schema migrations. Idempotent.
pub fn init(path: impl AsRef<Path>) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = open(path)?;
    schema::migrate(&conn)
}

/// Run `f` inside a transaction, committing on success
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&rusqlite::Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let result = f(&tx)?;
    tx.commit()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_init_creates_database() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap().to_string();
        drop(temp_file);

        init(&db_path).unwrap();
        let conn = open(&db_path).unwrap();
        let version = schema::get_schema_version(&conn).unwrap();
        assert_eq!(version, schema::SCHEMA_VERSION);
    }

    #[test]
    fn test_transaction_commits() {
        let temp_file = NamedTempFile::new().unwrap();
        let db_path = temp_file.path().to_str().unwrap().to_string();
        drop(temp_file);

        init(&db_path).unwrap();
        let mut conn = open(&db_path).unwrap();

        transaction(&mut conn, |tx| {
            let mut recipe = Recipe::new("Apple Pie".to_string());
            recipe.insert(tx)?;
            Ok(())
        })
        .unwrap();

        assert_eq!(Recipe::count_all(&conn).unwrap(), 1);
    }
}
