use crate::db::{store::TaskStore, tasks::Tasks};
use crate::libs::error::TaskResult;
use crate::libs::messages::Message;
use crate::libs::task::{required_text, Completion};
use crate::libs::view::View;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Text of the task to complete; unquoted words are joined with spaces
    text: Vec<String>,
}

impl DoneArgs {
    pub fn validate(self) -> TaskResult<String> {
        required_text(Some(&self.text.join(" ")), Message::TaskNameMandatory)
    }
}

/// Completes the first pending task with this text.
///
/// A task that is already completed is reported, not treated as a failure.
pub async fn cmd<S: TaskStore>(tasks: &Tasks<S>, text: &str, out: &mut impl Write) -> Result<()> {
    match tasks.complete(text).await {
        Ok(Completion::Completed(task)) => View::message(out, Message::TaskCompleted(task.text))?,
        Ok(Completion::AlreadyCompleted) => View::message(out, Message::TaskAlreadyCompleted)?,
        Err(e) if e.is_no_match() => msg_bail_anyhow!(Message::NoTaskToComplete),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
