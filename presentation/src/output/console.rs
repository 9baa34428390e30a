//! Console output formatter for stress relief reports

use colored::Colorize;
use relief_domain::{CredentialKind, OutputFormat, Report};

/// Formats reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a report in the requested format
    pub fn format(report: &Report, format: OutputFormat) -> String {
        match format {
            OutputFormat::Markdown => Self::format_markdown(report),
            OutputFormat::Pretty => Self::format_pretty(report),
            OutputFormat::Json => Self::format_json(report),
        }
    }

    /// The markdown document, byte for byte what gets saved
    pub fn format_markdown(report: &Report) -> String {
        report.markdown().to_string()
    }

    /// Styled rendering with one numbered section per block
    pub fn format_pretty(report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Stress Relief Report"));
        output.push('\n');

        let total = report.len();
        for (i, block) in report.blocks().iter().enumerate() {
            output.push_str(&format!(
                "\n{}\n{}\n{} {}\n",
                format!("── {}/{} ──", i + 1, total).yellow().bold(),
                block.paragraph.text(),
                "GIF:".cyan().bold(),
                block.image.url().underline()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(report: &Report) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Hint shown when a key is missing
    pub fn format_credential_hint(kind: CredentialKind) -> String {
        format!(
            "{} Get a {} key at {}",
            "hint:".yellow().bold(),
            kind.service_name(),
            kind.signup_url()
        )
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
