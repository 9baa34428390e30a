//! Presentation layer for stress-relief
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive session.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{CategoryArg, Cli, OutputFormatArg, ToneArg};
pub use cli::input::read_entry;
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::export::{ExportError, ReportExporter};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use session::ReliefRepl;
