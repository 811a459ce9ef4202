//! Project storage and lookup operations.
//!
//! Projects are lightweight groupings for tasks, identified by a unique
//! name and created lazily the first time a task references them. The
//! [`resolve`] helper runs on a borrowed connection so task operations can
//! resolve a project inside their own transactions.

use crate::db::db::Db;
use crate::libs::error::{StoreError, StoreResult};
use crate::libs::project::{Project, PROJECT_NAME_MAX_LEN};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

/// SQL schema for the projects table.
pub(crate) const SCHEMA_PROJECTS: &str = "CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    created_at TIMESTAMP NOT NULL
)";

const INSERT_PROJECT: &str = "INSERT OR IGNORE INTO projects (name, created_at) VALUES (?1, ?2)";
const SELECT_PROJECT_BY_NAME: &str = "SELECT id, name, created_at FROM projects WHERE name = ?1";
const SELECT_ALL_PROJECTS: &str = "SELECT id, name, created_at FROM projects ORDER BY created_at DESC, id DESC";
const COUNT_PROJECT_TASKS: &str = "SELECT COUNT(*) FROM tasks WHERE project_id = ?1";
const DELETE_PROJECT: &str = "DELETE FROM projects WHERE id = ?1";

/// Resolves a project name to its stored record, creating it on first use.
///
/// A blank name resolves to `None`. The insert uses `OR IGNORE`, so when
/// two writers race on the same name one insert silently loses and both
/// resolve to the surviving row on the follow-up select.
pub(crate) fn resolve(conn: &Connection, name: &str) -> StoreResult<Option<Project>> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(None);
    }
    if name.chars().count() > PROJECT_NAME_MAX_LEN {
        return Err(StoreError::Validation(format!("project name must be at most {PROJECT_NAME_MAX_LEN} characters")));
    }

    conn.execute(INSERT_PROJECT, params![name, Utc::now().naive_utc()])?;

    let project = conn.query_row(SELECT_PROJECT_BY_NAME, params![name], |row| {
        Ok(Project {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            created_at: Some(row.get(2)?),
        })
    })?;

    Ok(Some(project))
}

/// Database access layer for project records.
pub struct Projects {
    /// Active database connection for project operations
    pub conn: Connection,
}

impl Projects {
    /// Creates a new project repository on the default database.
    pub fn new() -> StoreResult<Self> {
        Self::with_db(Db::new()?)
    }

    /// Creates a repository on an already opened database.
    pub fn with_db(db: Db) -> StoreResult<Self> {
        // Ensure table exists
        db.conn.execute(SCHEMA_PROJECTS, [])?;
        Ok(Projects { conn: db.conn })
    }

    /// Creates a project by name, returning the stored record.
    ///
    /// Returns the existing record when the name is already taken, so
    /// repeated creation is not an error.
    pub fn create(&self, name: &str) -> StoreResult<Project> {
        self.get_or_create(name)?.ok_or_else(|| StoreError::Validation("project name must not be blank".to_string()))
    }

    /// Resolves a trimmed project name, creating the project on first use.
    ///
    /// Returns `None` for blank names.
    pub fn get_or_create(&self, name: &str) -> StoreResult<Option<Project>> {
        resolve(&self.conn, name)
    }

    /// Looks up a project by its exact name.
    pub fn get_by_name(&self, name: &str) -> StoreResult<Option<Project>> {
        let project = self
            .conn
            .query_row(SELECT_PROJECT_BY_NAME, params![name.trim()], |row| {
                Ok(Project {
                    id: Some(row.get(0)?),
                    name: row.get(1)?,
                    created_at: Some(row.get(2)?),
                })
            })
            .optional()?;

        Ok(project)
    }

    /// Retrieves all projects, newest first.
    pub fn list(&self) -> StoreResult<Vec<Project>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_PROJECTS)?;

        let projects = stmt.query_map([], |row| {
            Ok(Project {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                created_at: Some(row.get(2)?),
            })
        })?;

        let mut result = Vec::new();
        for project in projects {
            result.push(project?);
        }

        Ok(result)
    }

    /// Counts the tasks attached to a project.
    pub fn task_count(&self, id: i32) -> StoreResult<i32> {
        let count: i32 = self.conn.query_row(COUNT_PROJECT_TASKS, params![id], |row| row.get(0))?;
        Ok(count)
    }

    /// Deletes a project along with its tasks and their notes.
    pub fn delete(&self, id: i32) -> StoreResult<()> {
        let affected = self.conn.execute(DELETE_PROJECT, params![id])?;

        if affected == 0 {
            return Err(StoreError::ProjectNotFound(id));
        }

        Ok(())
    }
}
