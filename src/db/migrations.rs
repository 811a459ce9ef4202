//! Versioned schema migrations.
//!
//! The schema is never created ad hoc: every change ships as a numbered
//! migration, and a fresh database reaches the current layout by running
//! all of them in order. Applied versions are recorded in a `migrations`
//! table, so opening a database from an older build only runs what is
//! missing.
//!
//! All pending migrations are applied inside one transaction. A failure
//! rolls the database back to the version it started at.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklog::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut conn = Connection::open("worklog.db")?;
//!     init_with_migrations(&mut conn)?;
//!     let version = get_db_version(&conn)?;
//!     println!("schema version {}", version);
//!     Ok(())
//! }
//! ```

use crate::libs::error::StoreResult;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use rusqlite::{params, Connection, Transaction};

/// Tracking table recording which versions have been applied and when.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// One schema change: a version for ordering, a name for the history
/// listing, and the function that applies it.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> StoreResult<()>,
}

/// Registry of every migration the binary knows about, in order.
///
/// Registration order is the upgrade path: each migration assumes the
/// schema its predecessors left behind.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// The full schema history, oldest first.
    fn register_migrations(&mut self) {
        // Version 1: base tables, created parents-first so the foreign
        // key references resolve.
        self.add_migration(1, "create_base_tables", |tx| {
            // Projects group tasks; names are unique at the database level
            tx.execute(
                "CREATE TABLE IF NOT EXISTS projects (
                    id INTEGER PRIMARY KEY,
                    name TEXT NOT NULL UNIQUE,
                    created_at TIMESTAMP NOT NULL
                )",
                [],
            )?;

            // Tasks carry two activity clocks: updated_at moves on field
            // edits, last_touched_at on any activity including notes
            tx.execute(
                "CREATE TABLE IF NOT EXISTS tasks (
                    id INTEGER PRIMARY KEY,
                    title TEXT NOT NULL,
                    description TEXT NOT NULL DEFAULT '',
                    status TEXT NOT NULL DEFAULT 'in_progress',
                    next_action TEXT NOT NULL DEFAULT '',
                    priority INTEGER NOT NULL DEFAULT 2,
                    project_id INTEGER,
                    created_at TIMESTAMP NOT NULL,
                    updated_at TIMESTAMP NOT NULL,
                    last_touched_at TIMESTAMP NOT NULL,
                    FOREIGN KEY (project_id) REFERENCES projects(id) ON DELETE CASCADE
                )",
                [],
            )?;

            // Notes are append-only journal entries attached to a task
            tx.execute(
                "CREATE TABLE IF NOT EXISTS notes (
                    id INTEGER PRIMARY KEY,
                    task_id INTEGER NOT NULL,
                    content TEXT NOT NULL,
                    kind TEXT NOT NULL DEFAULT 'note',
                    created_at TIMESTAMP NOT NULL,
                    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
                )",
                [],
            )?;

            // Foreign key indices keep filtering and cascades off table scans
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_project_id ON tasks(project_id)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_notes_task_id ON notes(task_id)", [])?;

            Ok(())
        });

        // Version 2: indices for activity-ordered reads. Task listings and
        // resume sort by last_touched_at, note listings by created_at
        // within one task.
        self.add_migration(2, "add_activity_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_last_touched_at ON tasks(last_touched_at)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_notes_task_created ON notes(task_id, created_at)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> StoreResult<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the database's current version.
    ///
    /// Pending migrations run inside a single transaction together with
    /// their tracking-table inserts, so a failure leaves no half-applied
    /// version behind.
    pub fn run_migrations(&self, conn: &mut Connection) -> StoreResult<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in pending {
            msg_info!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_success!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    // tx drops here and rolls everything back
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version. A database without a tracking table (or
    /// with an empty one) is at version 0.
    fn get_current_version(&self, conn: &Connection) -> StoreResult<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> StoreResult<bool> {
        let count: i32 = conn.query_row("SELECT COUNT(*) FROM migrations WHERE version = ?1", params![version], |row| row.get(0))?;

        Ok(count > 0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    pub fn get_migration_history(&self, conn: &Connection) -> StoreResult<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }

    /// Forgets migration records newer than `target_version` so those
    /// migrations re-run on the next initialization.
    ///
    /// There are no down() functions and the schema itself is not
    /// reversed. The migrations are written with IF NOT EXISTS guards to
    /// survive re-running, and the whole facility exists only in debug
    /// builds.
    #[cfg(debug_assertions)]
    pub fn rollback_to(&self, conn: &mut Connection, target_version: u32) -> StoreResult<()> {
        let current_version = self.get_current_version(conn)?;

        if target_version >= current_version {
            msg_info!(Message::NothingToRollback);
            return Ok(());
        }

        msg_info!(Message::RollingBack(current_version, target_version));
        conn.execute("DELETE FROM migrations WHERE version > ?1", params![target_version])?;
        msg_success!(Message::RollbackCompleted(target_version));

        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings a connection up to the current schema version.
pub fn init_with_migrations(conn: &mut Connection) -> StoreResult<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Current schema version of the connected database.
pub fn get_db_version(conn: &Connection) -> StoreResult<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

/// Whether the database is behind the schema this binary ships with.
pub fn needs_migration(conn: &Connection) -> StoreResult<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    let latest = manager.migrations.last().map(|m| m.version).unwrap_or(0);
    Ok(current < latest)
}
