//! Persistence layer for tasker.
//!
//! ```text
//! commands ──▶ Tasks<S> ──▶ TaskStore ──┬─▶ MongoStore  (production)
//!                                       └─▶ MemoryStore (tests)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasker::db::{mongo::MongoStore, tasks::Tasks};
//! use tasker::libs::config::StoreConfig;
//! use tasker::libs::task::Task;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = MongoStore::connect(&StoreConfig::default()).await?;
//! let tasks = Tasks::new(store);
//! tasks.create(&Task::new("Review code")?).await?;
//! # Ok(())
//! # }
//! ```

/// In-memory store with the same semantics as the MongoDB adapter.
pub mod memory;

/// MongoDB adapter: connection bootstrap and typed filter translation.
pub mod mongo;

/// The storage contract the repository is written against.
pub mod store;

/// Task repository: lookups, completion and deletion rules.
pub mod tasks;
