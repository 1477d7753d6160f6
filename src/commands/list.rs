//! Listing commands: pending (the default), `all` and `finished`.
//!
//! An empty listing is not an error; it prints a hint pointing at the
//! command that would fill it.

use crate::db::{store::TaskStore, tasks::Tasks};
use crate::libs::error::TaskResult;
use crate::libs::messages::EmptyHint;
use crate::libs::task::Task;
use crate::libs::view::View;
use anyhow::Result;
use std::io::Write;

pub async fn pending<S: TaskStore>(tasks: &Tasks<S>, out: &mut impl Write) -> Result<()> {
    show(tasks.pending().await, EmptyHint::Add, out)
}

pub async fn all<S: TaskStore>(tasks: &Tasks<S>, out: &mut impl Write) -> Result<()> {
    show(tasks.all().await, EmptyHint::Add, out)
}

pub async fn finished<S: TaskStore>(tasks: &Tasks<S>, out: &mut impl Write) -> Result<()> {
    show(tasks.finished().await, EmptyHint::Done, out)
}

fn show(result: TaskResult<Vec<Task>>, hint: EmptyHint, out: &mut impl Write) -> Result<()> {
    match result {
        Ok(tasks) => View::tasks(out, &tasks)?,
        Err(e) if e.is_no_match() => View::empty(out, hint)?,
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
