//! Display implementation for worklog application messages.
//!
//! Provides the `Display` trait implementation for the `Message` enum,
//! turning structured message data into human-readable text for terminal
//! output. All user-facing strings live here, in one place, so wording
//! stays consistent and parameter interpolation stays type-safe.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created successfully", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task {} deleted along with its notes", id),
            Message::TaskCompleted(id) => format!("Task {} marked as done", id),
            Message::TaskReopened(id) => format!("Task {} reopened", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TaskDetailsHeader => "Task details:".to_string(),
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}' and all of its notes?", title),
            Message::SelectTaskAction => "What do you want to do?".to_string(),
            Message::SelectTask => "Select a task".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskTitleEdit => "Title".to_string(),
            Message::PromptTaskDescriptionEdit => "Description".to_string(),
            Message::PromptTaskNextActionEdit => "Next action".to_string(),
            Message::PromptTaskPriorityEdit => "Priority".to_string(),

            // === NOTE MESSAGES ===
            Message::NoteAdded(task_id) => format!("Note added to task {}", task_id),
            Message::NoteDeleted(id) => format!("Note {} deleted", id),
            Message::NoteNotFoundWithId(id) => format!("Note with ID {} not found.", id),
            Message::NotesHeader(task_id) => format!("Notes for task {}:", task_id),
            Message::NoNotesFound => "No notes found.".to_string(),
            Message::ConfirmDeleteNote(id) => format!("Delete note {}?", id),
            Message::SelectNoteAction => "What do you want to do?".to_string(),
            Message::PromptNoteTaskId => "Task ID".to_string(),
            Message::PromptNoteId => "Note ID".to_string(),
            Message::PromptNoteContent => "Note content".to_string(),

            // === PROJECT MESSAGES ===
            Message::ProjectCreated(name) => format!("Project '{}' is ready", name),
            Message::ProjectDeleted(name) => format!("Project '{}' deleted", name),
            Message::ProjectNotFound(name) => format!("Project '{}' not found.", name),
            Message::ProjectsHeader => "Projects:".to_string(),
            Message::NoProjectsFound => "No projects found.".to_string(),
            Message::ConfirmDeleteProject(name, count) => {
                format!("Delete project '{}' together with {} task(s) and their notes?", name, count)
            }
            Message::SelectProjectAction => "What do you want to do?".to_string(),
            Message::PromptProjectName => "Project name".to_string(),

            // === RESUME MESSAGES ===
            Message::ResumeHeader => "Picking up where you left off:".to_string(),
            Message::ResumeNotesHeader(count) => format!("Latest {} note(s):", count),
            Message::NoActiveTasks => "No active tasks. Capture one with 'worklog capture'.".to_string(),

            // === CAPTURE MESSAGES ===
            Message::CaptureSaved(id) => format!("Captured task {}", id),
            Message::PromptCaptureTitle => "What are you working on?".to_string(),
            Message::PromptCaptureProject => "Project (leave empty for none)".to_string(),
            Message::PromptCaptureDescription => "Context snapshot (optional)".to_string(),
            Message::PromptCaptureNextAction => "Next action (optional)".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleCapture => "Capture settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::PromptDefaultProject => "Default project for capture (leave empty to disable)".to_string(),
            Message::PromptNoteLimit => "Notes shown by 'note list'".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseVersion(version) => format!("Database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };

        write!(f, "{}", text)
    }
}
