//! Note storage operations.
//!
//! Notes are the append-only journal attached to tasks. Creating one bumps
//! the parent task's `last_touched_at` in the same transaction, which is
//! what floats a quietly-annotated task back to the top of `resume`.

use crate::db::db::Db;
use crate::db::tasks;
use crate::libs::error::{StoreError, StoreResult};
use crate::libs::note::{Note, NoteKind};
use chrono::Utc;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::str::FromStr;

/// SQL schema for the notes table.
pub(crate) const SCHEMA_NOTES: &str = "CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY,
    task_id INTEGER NOT NULL,
    content TEXT NOT NULL,
    kind TEXT NOT NULL DEFAULT 'note',
    created_at TIMESTAMP NOT NULL,
    FOREIGN KEY (task_id) REFERENCES tasks(id) ON DELETE CASCADE
)";

/// Shared with the tasks module, which records a snapshot note when a task
/// is captured with a description.
pub(crate) const INSERT_NOTE: &str = "INSERT INTO notes (task_id, content, kind, created_at) VALUES (?1, ?2, ?3, ?4)";

const SELECT_NOTES: &str = "SELECT id, task_id, content, kind, created_at FROM notes";
const WHERE_TASK: &str = "WHERE task_id = ?1";
const ORDER_BY_NEWEST: &str = "ORDER BY created_at DESC, id DESC";
const SELECT_TASK_EXISTS: &str = "SELECT id FROM tasks WHERE id = ?1";
const DELETE_NOTE: &str = "DELETE FROM notes WHERE id = ?1";

/// Listing limits are clamped into this range.
pub const NOTE_LIMIT_RANGE: std::ops::RangeInclusive<u32> = 1..=100;

fn map_note(row: &Row) -> rusqlite::Result<Note> {
    let kind: String = row.get(3)?;
    let kind = NoteKind::from_str(&kind).map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    Ok(Note {
        id: Some(row.get(0)?),
        task_id: row.get(1)?,
        content: row.get(2)?,
        kind,
        created_at: Some(row.get(4)?),
    })
}

/// Fetches a task's newest notes on a borrowed connection.
///
/// Used by the resume selector, which already holds the connection.
pub(crate) fn latest_for_task(conn: &Connection, task_id: i32, limit: u32) -> StoreResult<Vec<Note>> {
    let sql = format!("{} {} {} LIMIT ?2", SELECT_NOTES, WHERE_TASK, ORDER_BY_NEWEST);
    let mut stmt = conn.prepare(&sql)?;

    let note_iter = stmt.query_map(params![task_id, limit], map_note)?;

    let mut notes = Vec::new();
    for note in note_iter {
        notes.push(note?);
    }

    Ok(notes)
}

/// Database access layer for note records.
pub struct Notes {
    /// Active database connection for note operations
    pub conn: Connection,
}

impl Notes {
    /// Creates a new note repository on the default database.
    pub fn new() -> StoreResult<Self> {
        Self::with_db(Db::new()?)
    }

    /// Creates a repository on an already opened database.
    pub fn with_db(db: Db) -> StoreResult<Self> {
        // Ensure tables exist, parent first for the FK reference
        db.conn.execute(tasks::SCHEMA_TASKS, [])?;
        db.conn.execute(SCHEMA_NOTES, [])?;
        Ok(Notes { conn: db.conn })
    }

    /// Appends a note to a task and returns the stored record.
    ///
    /// Bumps the parent task's `last_touched_at` in the same transaction.
    /// `updated_at` stays put: adding a note is activity, not an edit.
    pub fn create(&mut self, task_id: i32, content: &str, kind: NoteKind) -> StoreResult<Note> {
        if content.trim().is_empty() {
            return Err(StoreError::Validation("note content must not be blank".to_string()));
        }

        let tx = self.conn.transaction()?;

        let task: Option<i32> = tx.query_row(SELECT_TASK_EXISTS, params![task_id], |row| row.get(0)).optional()?;
        if task.is_none() {
            return Err(StoreError::TaskNotFound(task_id));
        }

        let now = Utc::now().naive_utc();
        tx.execute(INSERT_NOTE, params![task_id, content, kind.as_str(), now])?;
        let id = tx.last_insert_rowid() as i32;

        tx.execute(tasks::TOUCH_TASK, params![now, task_id])?;

        tx.commit()?;

        Ok(Note {
            id: Some(id),
            task_id,
            content: content.to_string(),
            kind,
            created_at: Some(now),
        })
    }

    /// Retrieves a task's notes, newest first, capped at `limit`.
    ///
    /// The limit is clamped into [`NOTE_LIMIT_RANGE`]. An unknown task id
    /// yields an empty list rather than an error.
    pub fn list(&self, task_id: i32, limit: u32) -> StoreResult<Vec<Note>> {
        let limit = limit.clamp(*NOTE_LIMIT_RANGE.start(), *NOTE_LIMIT_RANGE.end());
        latest_for_task(&self.conn, task_id, limit)
    }

    /// Looks up a single note by id.
    pub fn get_by_id(&self, id: i32) -> StoreResult<Option<Note>> {
        let sql = format!("{} WHERE id = ?1", SELECT_NOTES);
        let note = self.conn.query_row(&sql, params![id], map_note).optional()?;

        Ok(note)
    }

    /// Deletes a note. The parent task's clocks are left alone.
    pub fn delete(&mut self, id: i32) -> StoreResult<()> {
        let affected = self.conn.execute(DELETE_NOTE, params![id])?;

        if affected == 0 {
            return Err(StoreError::NoteNotFound(id));
        }

        Ok(())
    }
}
