//! Task storage operations and the resume selector.
//!
//! Tasks are the central records of the journal. Every mutation here keeps
//! the two activity clocks honest: `updated_at` moves only when task fields
//! change, `last_touched_at` moves on any activity. Multi-step mutations
//! (project resolution, the initial snapshot note) run inside one
//! transaction so a task is never observable half-written.

use crate::db::db::Db;
use crate::db::{notes, projects};
use crate::libs::error::{StoreError, StoreResult};
use crate::libs::note::NoteKind;
use crate::libs::task::{NewTask, Resume, Task, TaskFilter, TaskPatch, TaskStatus, TASK_TITLE_MAX_LEN};
use chrono::Utc;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use std::str::FromStr;

/// SQL schema for the tasks table.
pub(crate) const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
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
)";

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status, next_action, priority, project_id, created_at, updated_at, last_touched_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?7, ?7)";
const UPDATE_TASK: &str = "UPDATE tasks
    SET title = ?1, description = ?2, status = ?3, next_action = ?4, priority = ?5, project_id = ?6, updated_at = ?7, last_touched_at = ?7
    WHERE id = ?8";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_PROJECT_ID: &str = "SELECT id FROM projects WHERE name = ?1";

/// Base select joining the project name onto each task row.
const SELECT_TASKS: &str = "SELECT t.id, t.title, t.description, t.status, t.next_action, t.priority, t.project_id, p.name,
    t.created_at, t.updated_at, t.last_touched_at
    FROM tasks t LEFT JOIN projects p ON p.id = t.project_id";
const WHERE_ID: &str = "WHERE t.id = ?1";
const WHERE_STATUS: &str = "WHERE t.status = ?1";
const WHERE_PROJECT: &str = "WHERE t.project_id = ?1";
const WHERE_STATUS_AND_PROJECT: &str = "WHERE t.status = ?1 AND t.project_id = ?2";
const WHERE_OPEN: &str = "WHERE t.status IN ('todo', 'in_progress', 'paused')";
const ORDER_BY_ACTIVITY: &str = "ORDER BY t.last_touched_at DESC, t.id DESC";

/// Bumps a task's activity clock without touching `updated_at`.
///
/// Shared with the notes module, which touches the parent task inside its
/// own insert transaction.
pub(crate) const TOUCH_TASK: &str = "UPDATE tasks SET last_touched_at = ?1 WHERE id = ?2";

/// How many of the winner's newest notes `resume` returns.
const RESUME_NOTES_LIMIT: u32 = 5;

/// Decodes a task row produced by [`SELECT_TASKS`].
fn map_task(row: &Row) -> rusqlite::Result<Task> {
    let status: String = row.get(3)?;
    let status = TaskStatus::from_str(&status).map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Task {
        id: Some(row.get(0)?),
        title: row.get(1)?,
        description: row.get(2)?,
        status,
        next_action: row.get(4)?,
        priority: row.get(5)?,
        project_id: row.get(6)?,
        project: row.get(7)?,
        created_at: Some(row.get(8)?),
        updated_at: Some(row.get(9)?),
        last_touched_at: Some(row.get(10)?),
    })
}

/// Validates and trims a task title.
fn normalize_title(title: &str) -> StoreResult<String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StoreError::Validation("task title must not be blank".to_string()));
    }
    if title.chars().count() > TASK_TITLE_MAX_LEN {
        return Err(StoreError::Validation(format!("task title must be at most {TASK_TITLE_MAX_LEN} characters")));
    }
    Ok(title.to_string())
}

/// Database access layer for task records.
pub struct Tasks {
    /// Active database connection for task operations
    pub conn: Connection,
}

impl Tasks {
    /// Creates a new task repository on the default database.
    pub fn new() -> StoreResult<Self> {
        Self::with_db(Db::new()?)
    }

    /// Creates a repository on an already opened database.
    pub fn with_db(db: Db) -> StoreResult<Self> {
        // Ensure tables exist, parents before children for the FK references
        db.conn.execute(projects::SCHEMA_PROJECTS, [])?;
        db.conn.execute(SCHEMA_TASKS, [])?;
        db.conn.execute(notes::SCHEMA_NOTES, [])?;
        Ok(Tasks { conn: db.conn })
    }

    /// Creates a task and returns the stored record.
    ///
    /// The project name, when given, is resolved through get-or-create. All
    /// three timestamps start equal. A non-blank description additionally
    /// records a `snapshot` note carrying the description text, in the same
    /// transaction and with the same timestamp.
    pub fn create(&mut self, new_task: &NewTask) -> StoreResult<Task> {
        let title = normalize_title(&new_task.title)?;

        let tx = self.conn.transaction()?;

        let project_id = match &new_task.project {
            Some(name) => projects::resolve(&tx, name)?.and_then(|p| p.id),
            None => None,
        };

        let now = Utc::now().naive_utc();
        tx.execute(
            INSERT_TASK,
            params![title, new_task.description, new_task.status.as_str(), new_task.next_action, new_task.priority, project_id, now],
        )?;
        let id = tx.last_insert_rowid() as i32;

        if !new_task.description.trim().is_empty() {
            tx.execute(notes::INSERT_NOTE, params![id, new_task.description, NoteKind::Snapshot.as_str(), now])?;
        }

        tx.commit()?;

        self.get(id)
    }

    /// Retrieves a task by id.
    pub fn get(&self, id: i32) -> StoreResult<Task> {
        let sql = format!("{} {}", SELECT_TASKS, WHERE_ID);
        let task = self.conn.query_row(&sql, params![id], map_task).optional()?;

        task.ok_or(StoreError::TaskNotFound(id))
    }

    /// Retrieves tasks matching the filter, most recently touched first.
    ///
    /// Set filter fields combine with AND. A project filter naming an
    /// unknown project matches nothing.
    pub fn list(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        let project_id = match &filter.project {
            Some(name) => {
                let id: Option<i32> = self.conn.query_row(SELECT_PROJECT_ID, params![name.trim()], |row| row.get(0)).optional()?;
                match id {
                    Some(id) => Some(id),
                    None => return Ok(Vec::new()),
                }
            }
            None => None,
        };
        let status = filter.status.map(|s| s.as_str());

        let (sql, params): (String, Vec<&dyn ToSql>) = match (&status, &project_id) {
            (None, None) => (format!("{} {}", SELECT_TASKS, ORDER_BY_ACTIVITY), Vec::new()),
            (Some(status), None) => (format!("{} {} {}", SELECT_TASKS, WHERE_STATUS, ORDER_BY_ACTIVITY), vec![status]),
            (None, Some(project_id)) => (format!("{} {} {}", SELECT_TASKS, WHERE_PROJECT, ORDER_BY_ACTIVITY), vec![project_id]),
            (Some(status), Some(project_id)) => (
                format!("{} {} {}", SELECT_TASKS, WHERE_STATUS_AND_PROJECT, ORDER_BY_ACTIVITY),
                vec![status as &dyn ToSql, project_id],
            ),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params.as_slice(), map_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Applies a partial update and returns the refreshed record.
    ///
    /// Omitted fields keep their stored values. A supplied project name is
    /// re-resolved through get-or-create; a blank name detaches the task
    /// from its project. Every successful update refreshes `updated_at` and
    /// `last_touched_at` together.
    pub fn update(&mut self, id: i32, patch: &TaskPatch) -> StoreResult<Task> {
        let tx = self.conn.transaction()?;

        let sql = format!("{} {}", SELECT_TASKS, WHERE_ID);
        let current = tx.query_row(&sql, params![id], map_task).optional()?.ok_or(StoreError::TaskNotFound(id))?;

        let title = match &patch.title {
            Some(title) => normalize_title(title)?,
            None => current.title,
        };
        let description = patch.description.clone().unwrap_or(current.description);
        let status = patch.status.unwrap_or(current.status);
        let next_action = patch.next_action.clone().unwrap_or(current.next_action);
        let priority = patch.priority.unwrap_or(current.priority);
        let project_id = match &patch.project {
            Some(name) => projects::resolve(&tx, name)?.and_then(|p| p.id),
            None => current.project_id,
        };

        let now = Utc::now().naive_utc();
        tx.execute(UPDATE_TASK, params![title, description, status.as_str(), next_action, priority, project_id, now, id])?;

        tx.commit()?;

        self.get(id)
    }

    /// Deletes a task; its notes go with it through the FK cascade.
    pub fn delete(&mut self, id: i32) -> StoreResult<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;

        if affected == 0 {
            return Err(StoreError::TaskNotFound(id));
        }

        Ok(())
    }

    /// Picks the task to pick work back up on.
    ///
    /// The winner is the open task (`todo`, `in_progress` or `paused`) with
    /// the greatest `last_touched_at`, delivered together with up to five of
    /// its newest notes. Purely a read: no timestamps move.
    pub fn resume(&self) -> StoreResult<Resume> {
        let sql = format!("{} {} {} LIMIT 1", SELECT_TASKS, WHERE_OPEN, ORDER_BY_ACTIVITY);
        let task = self.conn.query_row(&sql, [], map_task).optional()?.ok_or(StoreError::NoActiveTask)?;

        let latest_notes = match task.id {
            Some(task_id) => notes::latest_for_task(&self.conn, task_id, RESUME_NOTES_LIMIT)?,
            None => Vec::new(),
        };

        Ok(Resume { task, latest_notes })
    }
}
