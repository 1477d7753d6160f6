#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use tasker::commands::Action;
    use tasker::db::{memory::MemoryStore, store::TaskStore, tasks::Tasks};
    use tasker::libs::error::StoreResult;
    use tasker::libs::messages::{EmptyHint, Message};
    use tasker::libs::task::{Task, TaskFilter, TaskUpdate};
    use test_context::{test_context, AsyncTestContext};

    struct CommandTestContext {
        tasks: Tasks<MemoryStore>,
    }

    impl AsyncTestContext for CommandTestContext {
        async fn setup() -> CommandTestContext {
            colored::control::set_override(false);
            CommandTestContext {
                tasks: Tasks::new(MemoryStore::new()),
            }
        }
    }

    impl CommandTestContext {
        async fn run(&self, action: Action) -> anyhow::Result<String> {
            let mut out = Vec::new();
            action.execute(&self.tasks, &mut out).await?;
            Ok(String::from_utf8(out).unwrap())
        }
    }

    /// Matches tasks but never gets to update them.
    struct VanishingStore(MemoryStore);

    #[async_trait]
    impl TaskStore for VanishingStore {
        async fn insert(&self, task: &Task) -> StoreResult<()> {
            self.0.insert(task).await
        }

        async fn find(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
            self.0.find(filter).await
        }

        async fn update_one(&self, _filter: &TaskFilter, _update: &TaskUpdate) -> StoreResult<u64> {
            Ok(0)
        }

        async fn delete_one(&self, filter: &TaskFilter) -> StoreResult<u64> {
            self.0.delete_one(filter).await
        }
    }

    fn hint(hint: EmptyHint) -> String {
        format!("{}\n", Message::NothingToSee(hint))
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_listings_on_empty_store_show_hints(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(Action::Pending).await.unwrap(), hint(EmptyHint::Add));
        assert_eq!(ctx.run(Action::All).await.unwrap(), hint(EmptyHint::Add));
        assert_eq!(ctx.run(Action::Finished).await.unwrap(), hint(EmptyHint::Done));
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_add_and_list(ctx: &mut CommandTestContext) {
        assert_eq!(ctx.run(Action::Add("write report".into())).await.unwrap(), "Task added: write report\n");
        ctx.run(Action::Add("call bank".into())).await.unwrap();

        assert_eq!(ctx.run(Action::Pending).await.unwrap(), "1: write report\n2: call bank\n");
        assert_eq!(ctx.run(Action::All).await.unwrap(), "1: write report\n2: call bank\n");
        assert_eq!(ctx.run(Action::Finished).await.unwrap(), hint(EmptyHint::Done));
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_add_blank_text_writes_nothing(ctx: &mut CommandTestContext) {
        let err = ctx.run(Action::Add("  ".into())).await.unwrap_err();
        assert_eq!(err.to_string(), Message::EmptyTask.to_string());
        assert!(ctx.tasks.store().snapshot().is_empty());
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_done_then_done_again(ctx: &mut CommandTestContext) {
        ctx.run(Action::Add("t".into())).await.unwrap();

        assert_eq!(ctx.run(Action::Done("t".into())).await.unwrap(), "Task completed: t\n");
        assert_eq!(ctx.run(Action::Finished).await.unwrap(), "1: t\n");
        assert_eq!(ctx.run(Action::Pending).await.unwrap(), hint(EmptyHint::Add));

        let again = ctx.run(Action::Done("t".into())).await.unwrap();
        assert_eq!(again, format!("{}\n", Message::TaskAlreadyCompleted));
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_done_and_rm_on_missing_task_fail(ctx: &mut CommandTestContext) {
        let err = ctx.run(Action::Done("missing".into())).await.unwrap_err();
        assert_eq!(err.to_string(), Message::NoTaskToComplete.to_string());

        let err = ctx.run(Action::Remove("missing".into())).await.unwrap_err();
        assert_eq!(err.to_string(), Message::NoTaskToDelete.to_string());
    }

    #[tokio::test]
    async fn test_done_on_vanished_task_reports_no_task() {
        let tasks = Tasks::new(VanishingStore(MemoryStore::new()));
        tasks.create(&Task::new("t").unwrap()).await.unwrap();

        let mut out = Vec::new();
        let err = Action::Done("t".into()).execute(&tasks, &mut out).await.unwrap_err();
        assert_eq!(err.to_string(), Message::NoTaskToComplete.to_string());
        assert!(out.is_empty());
    }

    #[test_context(CommandTestContext)]
    #[tokio::test]
    async fn test_rm_removes_task(ctx: &mut CommandTestContext) {
        ctx.run(Action::Add("t".into())).await.unwrap();
        ctx.run(Action::Add("u".into())).await.unwrap();

        assert_eq!(ctx.run(Action::Remove("t".into())).await.unwrap(), "Deleted 1 task(s).\n");
        assert_eq!(ctx.run(Action::All).await.unwrap(), "1: u\n");
        assert!(ctx.run(Action::Remove("t".into())).await.is_err());
    }
}
