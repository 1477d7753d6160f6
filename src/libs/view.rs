use super::messages::{EmptyHint, Message};
use super::task::Task;
use colored::Colorize;
use std::io::{self, Write};

/// Console rendering of task listings and command feedback.
pub struct View {}

impl View {
    /// Numbered listing, completed tasks in green and pending ones in yellow.
    pub fn tasks(out: &mut impl Write, tasks: &[Task]) -> io::Result<()> {
        for (i, task) in tasks.iter().enumerate() {
            let line = format!("{}: {}", i + 1, task.text);
            if task.completed {
                writeln!(out, "{}", line.green())?;
            } else {
                writeln!(out, "{}", line.yellow())?;
            }
        }
        Ok(())
    }

    pub fn empty(out: &mut impl Write, hint: EmptyHint) -> io::Result<()> {
        Self::message(out, Message::NothingToSee(hint))
    }

    pub fn message(out: &mut impl Write, msg: Message) -> io::Result<()> {
        writeln!(out, "{}", msg)
    }

    /// Final error report, with its cause chain on one line.
    pub fn error(out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
        writeln!(out, "❌ {:#}", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::{now, TaskUpdate};

    fn render(tasks: &[Task]) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        View::tasks(&mut out, tasks).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn numbers_tasks_from_one() {
        let tasks = vec![Task::new("first").unwrap(), Task::new("second").unwrap()];
        assert_eq!(render(&tasks), "1: first\n2: second\n");
    }

    #[test]
    fn completed_tasks_keep_their_position() {
        let mut done = Task::new("done").unwrap();
        TaskUpdate::Complete { at: now() }.apply(&mut done);
        let tasks = vec![Task::new("pending").unwrap(), done];
        assert_eq!(render(&tasks), "1: pending\n2: done\n");
    }

    #[test]
    fn empty_listing_prints_nothing() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn error_report_includes_cause_chain() {
        let err = anyhow::anyhow!("Not a directory").context(Message::NoTaskToDelete);
        let mut out = Vec::new();
        View::error(&mut out, &err).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "❌ no task found to delete\nrun `all` to get all tasks: Not a directory\n"
        );
    }

    #[test]
    fn empty_hint_is_written_on_its_own_lines() {
        let mut out = Vec::new();
        View::empty(&mut out, EmptyHint::Done).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Nothing to see here.\nRun `done 'task'` to complete a task\n"
        );
    }
}
