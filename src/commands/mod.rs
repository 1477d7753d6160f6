pub mod add;
pub mod done;
pub mod init;
pub mod list;
pub mod rm;

use crate::db::{mongo::MongoStore, store::TaskStore, tasks::Tasks};
use crate::libs::config::{Config, StoreConfig};
use crate::libs::error::{TaskError, TaskResult};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(flatten)]
    Task(TaskCommand),
    #[command(about = "Configure the task store connection")]
    Init(init::InitArgs),
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    #[command(visible_alias = "a", about = "Add new task to the list")]
    Add(add::AddArgs),
    #[command(visible_alias = "l", about = "List all the tasks")]
    All,
    #[command(visible_alias = "d", about = "Complete a task on the list")]
    Done(done::DoneArgs),
    #[command(visible_alias = "f", about = "List completed tasks")]
    Finished,
    #[command(about = "Delete a task on the list")]
    Rm(rm::RmArgs),
}

/// Per-invocation overrides of the resolved store configuration.
#[derive(Debug, Default, Args)]
pub struct StoreArgs {
    /// MongoDB connection string
    #[arg(long, global = true)]
    uri: Option<String>,
    /// Database holding the task collection
    #[arg(long, global = true)]
    database: Option<String>,
    /// Collection holding the tasks
    #[arg(long, global = true)]
    collection: Option<String>,
}

impl StoreArgs {
    pub fn apply(&self, mut config: StoreConfig) -> StoreConfig {
        if let Some(uri) = &self.uri {
            config.uri = uri.clone();
        }
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if let Some(collection) = &self.collection {
            config.collection = collection.clone();
        }
        config
    }
}

#[derive(Debug, Parser)]
#[command(name = "tasker", author, version, about = "A simple CLI program to manage your tasks", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    store: StoreArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

/// A validated task command, ready to run against a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Pending,
    All,
    Finished,
    Add(String),
    Done(String),
    Remove(String),
}

impl Action {
    pub async fn execute<S: TaskStore>(self, tasks: &Tasks<S>, out: &mut impl Write) -> Result<()> {
        match self {
            Action::Pending => list::pending(tasks, out).await,
            Action::All => list::all(tasks, out).await,
            Action::Finished => list::finished(tasks, out).await,
            Action::Add(text) => add::cmd(tasks, &text, out).await,
            Action::Done(text) => done::cmd(tasks, &text, out).await,
            Action::Remove(text) => rm::cmd(tasks, &text, out).await,
        }
    }
}

impl TaskCommand {
    fn validate(self) -> TaskResult<Action> {
        Ok(match self {
            TaskCommand::Add(args) => Action::Add(args.validate()?),
            TaskCommand::All => Action::All,
            TaskCommand::Done(args) => Action::Done(args.validate()?),
            TaskCommand::Finished => Action::Finished,
            TaskCommand::Rm(args) => Action::Remove(args.validate()?),
        })
    }
}

/// What a parsed command line asks for, after validation.
#[derive(Debug)]
enum Invocation {
    Init(init::InitArgs),
    Task(Action),
}

impl Cli {
    pub async fn menu() -> Result<()> {
        Self::parse().run(&mut io::stdout()).await
    }

    /// Validates the command, then resolves configuration, connects and runs it.
    ///
    /// Validation errors are returned before the store is touched.
    pub async fn run(self, out: &mut impl Write) -> Result<()> {
        let invocation = Self::invocation(self.command)?;
        let config = self.store.apply(resolve_store(&Config::read()?));

        match invocation {
            Invocation::Init(args) => init::cmd(args, config),
            Invocation::Task(action) => {
                let store = MongoStore::connect(&config).await.map_err(TaskError::from)?;
                action.execute(&Tasks::new(store), out).await
            }
        }
    }

    fn invocation(command: Option<Commands>) -> TaskResult<Invocation> {
        match command {
            Some(Commands::Init(args)) => Ok(Invocation::Init(args)),
            Some(Commands::Task(command)) => command.validate().map(Invocation::Task),
            None => Ok(Invocation::Task(Action::Pending)),
        }
    }
}

fn resolve_store(config: &Config) -> StoreConfig {
    config.store_config(|key| std::env::var(key).ok())
}
