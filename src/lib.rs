//! # Tasker
//!
//! A small command-line task manager backed by a MongoDB collection.
//!
//! ## Features
//!
//! - **Add** a task, **complete** it by its text, **remove** it by its text
//! - **List** pending (the default), finished or all tasks, colour-coded
//! - **Configure** the store through `config.json`, `TASKER_*` variables or flags
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasker::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
