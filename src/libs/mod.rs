//! Core library modules for the worklog application.
//!
//! Serves as the main entry point for all worklog library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Domain Types**: Tasks, notes, projects and their enumerations
//! - **Error Handling**: Typed storage errors shared across layers
//! - **User Interface**: Console table rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use worklog::db::tasks::Tasks;
//! use worklog::libs::task::NewTask;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut tasks = Tasks::new()?;
//!     let task = tasks.create(&NewTask::new("Review storage layer"))?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod note;
pub mod project;
pub mod task;
pub mod view;
