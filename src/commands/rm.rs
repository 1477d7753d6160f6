use crate::db::{store::TaskStore, tasks::Tasks};
use crate::libs::error::TaskResult;
use crate::libs::messages::Message;
use crate::libs::task::required_text;
use crate::libs::view::View;
use crate::msg_bail_anyhow;
use anyhow::Result;
use clap::Args;
use std::io::Write;

#[derive(Debug, Args)]
pub struct RmArgs {
    /// Text of the task(s) to delete; unquoted words are joined with spaces
    text: Vec<String>,
}

impl RmArgs {
    pub fn validate(self) -> TaskResult<String> {
        required_text(Some(&self.text.join(" ")), Message::TaskNameMandatory)
    }
}

pub async fn cmd<S: TaskStore>(tasks: &Tasks<S>, text: &str, out: &mut impl Write) -> Result<()> {
    match tasks.delete(text).await {
        Ok(deleted) => View::message(out, Message::TasksDeletedCount(deleted))?,
        Err(e) if e.is_no_match() => msg_bail_anyhow!(Message::NoTaskToDelete),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
