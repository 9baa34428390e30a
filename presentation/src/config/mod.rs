//! Presentation-level configuration
//!
//! Configuration for output formatting and the interactive session.

use relief_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    /// How reports are shown
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show progress indicators
    pub show_progress: bool,
    /// Default target for saving a report
    pub report_file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
            report_file: PathBuf::from("stress_relief_report.md"),
        }
    }
}

impl OutputConfig {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }
}

impl OutputConfig {
    /// Apply the color preference to all `colored` output.
    pub fn apply_color_preference(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}
