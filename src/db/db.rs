//! Database connection management.
//!
//! [`Db`] owns exactly one SQLite connection. There is no global handle:
//! every repository is built from its own `Db` value, created when a
//! command starts and dropped when it finishes, so connections are
//! released deterministically on every exit path.
//!
//! Connections are always configured the same way: foreign keys enforced
//! (delete cascades depend on it) and a busy timeout so concurrent writers
//! queue instead of failing.

use crate::db::migrations::init_with_migrations;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::StoreResult;
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

/// Database file name inside the application data directory.
pub const DB_FILE_NAME: &str = "worklog.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at its default location and applies pending
    /// migrations.
    pub fn new() -> StoreResult<Db> {
        let path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(path)
    }

    /// Opens the database at an explicit path and applies pending
    /// migrations. Used by tests to keep every test on its own file.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Db> {
        let mut conn = Self::connect(path)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens the database at its default location without touching the
    /// schema. Migration tooling uses this to inspect state.
    pub fn new_without_migrations() -> StoreResult<Db> {
        let path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(Db { conn: Self::connect(path)? })
    }

    fn connect<P: AsRef<Path>>(path: P) -> StoreResult<Connection> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }
}
