//! # Worklog - Personal Work Journal
//!
//! A command-line utility for capturing tasks, attaching timestamped notes,
//! and resuming the most recently active piece of work.
//!
//! ## Features
//!
//! - **Quick Capture**: Record a task with its context in one command
//! - **Task Management**: Create, update, filter, and complete tasks
//! - **Timestamped Notes**: Attach notes, decisions, and blockers to tasks
//! - **Resume**: Pull up the task you touched last, with its latest notes
//! - **Projects**: Group tasks under named projects created on first use
//!
//! ## Activity Tracking
//!
//! Every task carries two clocks: `updated_at` moves when task fields
//! change, while `last_touched_at` moves on any activity, including note
//! creation. The `resume` command orders by activity, so jotting a note on
//! an old task makes it the current one without editing the task itself.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
