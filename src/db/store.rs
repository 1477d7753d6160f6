use crate::libs::error::StoreResult;
use crate::libs::task::{Task, TaskFilter, TaskUpdate};
use async_trait::async_trait;

/// Persistence contract for the task collection.
///
/// Implementations translate the typed filters and updates into whatever the
/// backend understands. Nothing above this trait sees store-native documents.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Inserts a fully populated task.
    async fn insert(&self, task: &Task) -> StoreResult<()>;

    /// Returns every matching task in the store's natural order.
    async fn find(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>>;

    /// Applies `update` to the first matching task. Returns the matched count.
    async fn update_one(&self, filter: &TaskFilter, update: &TaskUpdate) -> StoreResult<u64>;

    /// Removes the first matching task. Returns the deleted count.
    async fn delete_one(&self, filter: &TaskFilter) -> StoreResult<u64>;
}
