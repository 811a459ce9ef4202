#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i32),
    TaskUpdated(i32),
    TaskDeleted(i32),
    TaskCompleted(i32),
    TaskReopened(i32),
    TaskNotFoundWithId(i32),
    TasksHeader,
    TaskDetailsHeader,
    NoTasksFound,
    ConfirmDeleteTask(String),
    SelectTaskAction,
    SelectTask,
    PromptTaskTitle,
    PromptTaskTitleEdit,
    PromptTaskDescriptionEdit,
    PromptTaskNextActionEdit,
    PromptTaskPriorityEdit,

    // === NOTE MESSAGES ===
    NoteAdded(i32),   // parent task id
    NoteDeleted(i32), // note id
    NoteNotFoundWithId(i32),
    NotesHeader(i32), // task id
    NoNotesFound,
    ConfirmDeleteNote(i32),
    SelectNoteAction,
    PromptNoteTaskId,
    PromptNoteId,
    PromptNoteContent,

    // === PROJECT MESSAGES ===
    ProjectCreated(String),
    ProjectDeleted(String),
    ProjectNotFound(String), // name or id as typed
    ProjectsHeader,
    NoProjectsFound,
    ConfirmDeleteProject(String, usize), // name, task count
    SelectProjectAction,
    PromptProjectName,

    // === RESUME MESSAGES ===
    ResumeHeader,
    ResumeNotesHeader(usize), // notes shown
    NoActiveTasks,

    // === CAPTURE MESSAGES ===
    CaptureSaved(i32),
    PromptCaptureTitle,
    PromptCaptureProject,
    PromptCaptureDescription,
    PromptCaptureNextAction,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptSelectModules,
    ConfigModuleCapture,
    ConfigModuleDisplay,
    PromptDefaultProject,
    PromptNoteLimit,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    NothingToRollback,
    RollingBack(u32, u32), // from, to
    RollbackCompleted(u32),

    // === GENERIC MESSAGES ===
    OperationCancelled,
}
