//! Display implementation for tasker messages.
//!
//! All user-facing text is defined here so that commands, the presenter and
//! error types share one wording.

use super::types::{EmptyHint, Message};
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(text) => format!("Task added: {}", text),
            Message::TaskCompleted(text) => format!("Task completed: {}", text),
            Message::TaskAlreadyCompleted => "Task is already marked as completed".to_string(),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s).", count),
            Message::EmptyTask => "can not add empty task".to_string(),
            Message::TaskNameMandatory => "Task name is mandatory\nRun `all` to get list of all tasks".to_string(),
            Message::NoTaskToComplete => "no task found to mark as complete\nrun `all` to get all tasks".to_string(),
            Message::NoTaskToDelete => "no task found to delete\nrun `all` to get all tasks".to_string(),
            Message::NoTasksDeleted => "no tasks were deleted".to_string(),
            Message::NoMatchingTasks => "no matching tasks found".to_string(),
            Message::NothingToSee(hint) => format!("Nothing to see here.\n{}", hint),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigReadError(path) => format!("Failed to read configuration from {}", path),
            Message::ConfigSaveError(path) => format!("Failed to save configuration to {}", path),
            Message::DataStoragePathError => "Failed to prepare the data directory".to_string(),

            // === PROMPTS ===
            Message::PromptStoreUri => "Store connection string".to_string(),
            Message::PromptDatabase => "Database name".to_string(),
            Message::PromptCollection => "Collection name".to_string(),
        };
        write!(f, "{}", s)
    }
}

impl Display for EmptyHint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            EmptyHint::Add => write!(f, "Run `add 'task'` to add a task"),
            EmptyHint::Done => write!(f, "Run `done 'task'` to complete a task"),
        }
    }
}
