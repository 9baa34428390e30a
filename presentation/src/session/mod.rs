//! Interactive session
//!
//! Provides a reedline-based session for entering keys and text and
//! generating reports.

mod command;
mod repl;

pub use command::{CommandError, ReplCommand};
pub use repl::{LoopAction, ReliefRepl};
