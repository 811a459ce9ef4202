//! Typed errors for the storage core.
//!
//! Every repository operation returns [`StoreResult`], so callers can tell
//! a missing row from bad input without string matching. The command layer
//! matches on the variants it wants to handle gently and lets the rest
//! bubble up through `anyhow`.

use thiserror::Error;

/// Errors produced by the storage layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input failed a write-time check; nothing was persisted.
    #[error("{0}")]
    Validation(String),

    /// Referenced task id does not exist.
    #[error("task {0} not found")]
    TaskNotFound(i32),

    /// Referenced note id does not exist.
    #[error("note {0} not found")]
    NoteNotFound(i32),

    /// Referenced project id does not exist.
    #[error("project {0} not found")]
    ProjectNotFound(i32),

    /// Resume found no task outside `done`.
    #[error("no active tasks")]
    NoActiveTask,

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
