use crate::db::{store::TaskStore, tasks::Tasks};
use crate::libs::error::TaskResult;
use crate::libs::messages::Message;
use crate::libs::task::{required_text, Task};
use crate::libs::view::View;
use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description; unquoted words are joined with spaces
    text: Vec<String>,
}

impl AddArgs {
    pub fn validate(self) -> TaskResult<String> {
        required_text(Some(&self.text.join(" ")), Message::EmptyTask)
    }
}

pub async fn cmd<S: TaskStore>(tasks: &Tasks<S>, text: &str, out: &mut impl Write) -> Result<()> {
    let task = Task::new(text)?;
    tasks.create(&task).await?;

    View::message(out, Message::TaskAdded(task.text))?;
    Ok(())
}
