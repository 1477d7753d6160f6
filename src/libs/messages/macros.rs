//! Convenient macros for application messaging and logging.
//!
//! In normal mode the macros print plain text to the console. In debug mode
//! (`TASKER_DEBUG` or `RUST_LOG` set) the same text is routed through
//! `tracing`, so it interleaves with the diagnostic output of the store
//! adapter and the repository.
//!
//! ## Usage Examples
//!
//! ```rust
//! use tasker::{msg_debug, msg_print, msg_success};
//! use tasker::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_print!(Message::TaskAlreadyCompleted);
//! msg_debug!(format!("resolved collection {}", "task"));
//! ```

use std::sync::OnceLock;

/// Cached result of debug mode detection.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled.
///
/// Environment variables are read once per process; later calls return the
/// cached answer.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKER_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Debug-only message, dropped entirely outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
