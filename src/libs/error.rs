//! Error types shared by the store adapters, the repository and the commands.

use crate::libs::messages::Message;
use thiserror::Error;

/// Result type for store adapter operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for repository operations.
pub type TaskResult<T> = Result<T, TaskError>;

/// Failures reported by a [`TaskStore`](crate::db::store::TaskStore) backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or did not answer the liveness ping.
    #[error("failed to connect to task store at {uri}: {source}")]
    Connection {
        uri: String,
        #[source]
        source: mongodb::error::Error,
    },

    /// An insert, query, update or delete failed after connecting.
    #[error("task store operation failed: {0}")]
    Operation(#[from] mongodb::error::Error),
}

/// Failures of task repository and command operations.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A required argument was missing or blank.
    #[error("{0}")]
    Validation(Message),

    /// A lookup selected zero tasks.
    #[error("{}", Message::NoMatchingTasks)]
    NoMatch,

    /// A task was found but the store removed nothing.
    #[error("{}", Message::NoTasksDeleted)]
    DeleteFailed,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Coarse classification of a [`TaskError`], for callers that branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NoMatch,
    DeleteFailed,
    Connection,
    Store,
}

impl TaskError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaskError::Validation(_) => ErrorKind::Validation,
            TaskError::NoMatch => ErrorKind::NoMatch,
            TaskError::DeleteFailed => ErrorKind::DeleteFailed,
            TaskError::Store(StoreError::Connection { .. }) => ErrorKind::Connection,
            TaskError::Store(StoreError::Operation(_)) => ErrorKind::Store,
        }
    }

    pub fn is_no_match(&self) -> bool {
        self.kind() == ErrorKind::NoMatch
    }
}
