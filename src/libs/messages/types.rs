/// Every piece of user-facing text the application can print.
///
/// Text itself lives in the `Display` implementation in `display.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),     // text
    TaskCompleted(String), // text
    TaskAlreadyCompleted,
    TasksDeletedCount(u64),
    EmptyTask,
    TaskNameMandatory,
    NoTaskToComplete,
    NoTaskToDelete,
    NoTasksDeleted,
    NoMatchingTasks,
    NothingToSee(EmptyHint),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigReadError(String), // path
    ConfigSaveError(String), // path
    DataStoragePathError,

    // === PROMPTS ===
    PromptStoreUri,
    PromptDatabase,
    PromptCollection,
}

/// Which follow-up command an empty listing should suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyHint {
    Add,
    Done,
}
