//! Note domain types.

use crate::libs::error::StoreError;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a note records about its task.
///
/// `Snapshot` is reserved for the note created automatically from a task
/// description at capture time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum NoteKind {
    Note,
    Decision,
    Blocker,
    Snapshot,
}

impl NoteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteKind::Note => "note",
            NoteKind::Decision => "decision",
            NoteKind::Blocker => "blocker",
            NoteKind::Snapshot => "snapshot",
        }
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoteKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "note" => Ok(NoteKind::Note),
            "decision" => Ok(NoteKind::Decision),
            "blocker" => Ok(NoteKind::Blocker),
            "snapshot" => Ok(NoteKind::Snapshot),
            other => Err(StoreError::Validation(format!("unknown note kind: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: Option<i32>,
    pub task_id: i32,
    pub content: String,
    pub kind: NoteKind,
    pub created_at: Option<NaiveDateTime>,
}
