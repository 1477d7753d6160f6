use super::error::{TaskError, TaskResult};
use super::messages::Message;
use bson::oid::ObjectId;
use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A to-do item as stored in the `task` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
    pub text: String,
    pub completed: bool,
}

impl Task {
    /// Builds a new pending task with a fresh id and equal timestamps.
    ///
    /// Fails with [`TaskError::Validation`] when `text` is blank.
    pub fn new(text: &str) -> TaskResult<Self> {
        let text = required_text(Some(text), Message::EmptyTask)?;
        let now = now();

        Ok(Task {
            id: ObjectId::new(),
            created_at: now,
            updated_at: now,
            text,
            completed: false,
        })
    }
}

/// Typed predicate over task fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    ByCompleted(bool),
    ByText(String),
    ById(ObjectId),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::ByCompleted(completed) => task.completed == *completed,
            TaskFilter::ByText(text) => task.text == *text,
            TaskFilter::ById(id) => task.id == *id,
        }
    }
}

/// Typed update intent applied to a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskUpdate {
    Complete { at: DateTime<Utc> },
}

impl TaskUpdate {
    pub fn apply(&self, task: &mut Task) {
        match self {
            TaskUpdate::Complete { at } => {
                task.completed = true;
                task.updated_at = *at;
            }
        }
    }
}

/// Outcome of completing a task by its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// The first pending match, as it was persisted.
    Completed(Task),
    /// Every match was already completed; nothing changed.
    AlreadyCompleted,
}

/// Current time at the millisecond precision BSON dates keep.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Trims a free-text argument and rejects it with `on_empty` when blank.
pub fn required_text(text: Option<&str>, on_empty: Message) -> TaskResult<String> {
    match text.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(TaskError::Validation(on_empty)),
    }
}
