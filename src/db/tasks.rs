use super::store::TaskStore;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::{now, Completion, Task, TaskFilter, TaskUpdate};
use crate::msg_debug;

/// Task operations over a [`TaskStore`].
///
/// Built once per process and handed to the command that runs.
pub struct Tasks<S> {
    store: S,
}

impl<S: TaskStore> Tasks<S> {
    pub fn new(store: S) -> Self {
        Tasks { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create(&self, task: &Task) -> TaskResult<()> {
        msg_debug!(format!("inserting task {} ({})", task.id, task.text));
        self.store.insert(task).await?;
        Ok(())
    }

    /// Drains every task matching `filter`; zero matches is [`TaskError::NoMatch`].
    pub async fn fetch(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let tasks = self.store.find(&filter).await?;
        msg_debug!(format!("{:?} matched {} task(s)", filter, tasks.len()));

        if tasks.is_empty() {
            return Err(TaskError::NoMatch);
        }
        Ok(tasks)
    }

    pub async fn all(&self) -> TaskResult<Vec<Task>> {
        self.fetch(TaskFilter::All).await
    }

    pub async fn pending(&self) -> TaskResult<Vec<Task>> {
        self.fetch(TaskFilter::ByCompleted(false)).await
    }

    pub async fn finished(&self) -> TaskResult<Vec<Task>> {
        self.fetch(TaskFilter::ByCompleted(true)).await
    }

    pub async fn by_text(&self, text: &str) -> TaskResult<Vec<Task>> {
        self.fetch(TaskFilter::ByText(text.to_string())).await
    }

    /// Completes the first not-yet-completed task whose text is `text`.
    ///
    /// Already completed matches are skipped. When every match is already
    /// completed the result is [`Completion::AlreadyCompleted`].
    pub async fn complete(&self, text: &str) -> TaskResult<Completion> {
        for mut task in self.by_text(text).await? {
            if task.completed {
                msg_debug!(format!("task {} is already marked as completed", task.id));
                continue;
            }

            let update = TaskUpdate::Complete {
                at: now().max(task.created_at),
            };
            if self.store.update_one(&TaskFilter::ById(task.id), &update).await? == 0 {
                return Err(TaskError::NoMatch);
            }
            update.apply(&mut task);
            return Ok(Completion::Completed(task));
        }

        Ok(Completion::AlreadyCompleted)
    }

    /// Deletes every task whose text is `text`, returning how many went.
    ///
    /// A match the store then fails to remove is [`TaskError::DeleteFailed`].
    pub async fn delete(&self, text: &str) -> TaskResult<u64> {
        let mut deleted = 0;
        for task in self.by_text(text).await? {
            if self.store.delete_one(&TaskFilter::ById(task.id)).await? == 0 {
                return Err(TaskError::DeleteFailed);
            }
            deleted += 1;
        }
        Ok(deleted)
    }
}
