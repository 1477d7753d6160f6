//! Core library modules for tasker.
//!
//! - **Domain**: the [`task::Task`] record, typed filters and updates
//! - **Errors**: the store and repository error taxonomy
//! - **Configuration**: store settings and the per-user data directory
//! - **Presentation**: console rendering and user-facing messages

pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod task;
pub mod view;
