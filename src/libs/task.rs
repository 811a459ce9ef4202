//! Task domain types shared by the storage layer and the CLI.

use crate::libs::error::StoreError;
use crate::libs::note::Note;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest accepted task title, counted in characters after trimming.
pub const TASK_TITLE_MAX_LEN: usize = 300;

/// Task lifecycle state.
///
/// The set is closed on purpose: `resume` filters on it, so free-form text
/// would silently drop tasks from the selector. Unknown values are rejected
/// both at the CLI boundary and when decoding rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Paused,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
            TaskStatus::Paused => "paused",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(TaskStatus::Todo),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            "paused" => Ok(TaskStatus::Paused),
            other => Err(StoreError::Validation(format!("unknown task status: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i32>,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub next_action: String,
    pub priority: i32,
    pub project_id: Option<i32>,
    /// Resolved project name, filled by the read queries.
    pub project: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    /// Moves when task fields change.
    pub updated_at: Option<NaiveDateTime>,
    /// Moves on any activity, note creation included.
    pub last_touched_at: Option<NaiveDateTime>,
}

/// Input for creating a task.
///
/// Fields other than the title default to what a bare quick capture needs.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub next_action: String,
    pub priority: i32,
    pub status: TaskStatus,
    /// Resolved through project get-or-create; blank or absent means none.
    pub project: Option<String>,
}

impl NewTask {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            next_action: String::new(),
            priority: 2,
            status: TaskStatus::InProgress,
            project: None,
        }
    }
}

/// Partial update for a task. `None` fields are left untouched.
///
/// A `Some` project name is re-resolved through get-or-create; a blank name
/// clears the project link.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub next_action: Option<String>,
    pub priority: Option<i32>,
    pub status: Option<TaskStatus>,
    pub project: Option<String>,
}

/// Filter for task listings. Set fields combine with AND.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub project: Option<String>,
}

/// What `resume` hands back: the most recently touched open task together
/// with its newest notes.
#[derive(Debug, Serialize)]
pub struct Resume {
    pub task: Task,
    pub latest_notes: Vec<Note>,
}
