//! In-memory task store, used by tests and anywhere a MongoDB server is not wanted.

use super::store::TaskStore;
use crate::libs::error::StoreResult;
use crate::libs::task::{Task, TaskFilter, TaskUpdate};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

/// Insertion-ordered store behind a shared lock.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tasks: Arc<RwLock<Vec<Task>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything stored, in insertion order.
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.read().clone()
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert(&self, task: &Task) -> StoreResult<()> {
        self.tasks.write().push(task.clone());
        Ok(())
    }

    async fn find(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.read().iter().filter(|task| filter.matches(task)).cloned().collect())
    }

    async fn update_one(&self, filter: &TaskFilter, update: &TaskUpdate) -> StoreResult<u64> {
        let mut tasks = self.tasks.write();
        match tasks.iter_mut().find(|task| filter.matches(task)) {
            Some(task) => {
                update.apply(task);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, filter: &TaskFilter) -> StoreResult<u64> {
        let mut tasks = self.tasks.write();
        match tasks.iter().position(|task| filter.matches(task)) {
            Some(index) => {
                tasks.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
