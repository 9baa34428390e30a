//! Output configuration from TOML (`[output]` section)

use relief_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Re-export OutputFormat from domain for convenience
pub use relief_domain::OutputFormat as FileOutputFormat;

/// Default download filename
pub const DEFAULT_REPORT_FILE: &str = "stress_relief_report.md";

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Where `--save` and `/save` write when no path is given
    pub report_file: PathBuf,
    /// Show spinners while the pipeline runs
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            show_progress: true,
        }
    }
}
