//! Database layer for the worklog application.
//!
//! Provides the persistence layer built on SQLite: type-safe repositories
//! for each entity, a migration system for schema evolution, and shared
//! connection setup.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Connection management and migrations
//! - **Task Management**: Task records with dual activity clocks
//! - **Journaling**: Append-only notes attached to tasks
//! - **Organization**: Named projects created lazily on first reference
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklog::db::{notes::Notes, tasks::Tasks};
//! use worklog::libs::note::NoteKind;
//! use worklog::libs::task::NewTask;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut tasks = Tasks::new()?;
//!     let task = tasks.create(&NewTask::new("Review PR #123"))?;
//!
//!     let mut notes = Notes::new()?;
//!     notes.create(task.id.unwrap(), "left comments on the migration", NoteKind::Note)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Consistency Rules
//!
//! - Multi-step mutations run inside a single transaction per operation.
//! - `PRAGMA foreign_keys = ON` on every connection; deletes cascade from
//!   projects to tasks to notes.
//! - Timestamps are generated in-process with microsecond precision, so
//!   activity ordering stays stable within the same second.

/// Core database connection and initialization module.
///
/// Provides the fundamental `Db` struct that manages SQLite connections,
/// applies migrations, and ensures proper database configuration.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes, tracks migration history, and provides
/// development-time migration management commands.
pub mod migrations;

/// Append-only note journal.
///
/// Stores timestamped notes attached to tasks and keeps the parent task's
/// activity clock in sync when notes are added.
pub mod notes;

/// Project grouping operations.
///
/// Resolves unique project names with get-or-create semantics and manages
/// the project lifecycle.
pub mod projects;

/// Core task management operations.
///
/// Handles CRUD operations for tasks, list filtering, and the resume
/// selector that picks the most recently touched open task.
pub mod tasks;
