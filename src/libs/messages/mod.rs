pub mod display;
pub mod macros;
pub mod types;

pub use types::{EmptyHint, Message};
