//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished report is shown on the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The markdown document exactly as it is saved (default)
    #[default]
    Markdown,
    /// Styled terminal rendering with numbered blocks
    Pretty,
    /// JSON with blocks and the markdown document
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_markdown() {
        assert_eq!(OutputFormat::default(), OutputFormat::Markdown);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Pretty).unwrap();
        assert_eq!(json, "\"pretty\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
