//! Model configuration from TOML (`[models]` section)

use relief_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};

/// Model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// text = "gpt-4o-mini"   # used by both reframing and enrichment
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Text-generation model for both stages
    pub text: Option<String>,
}

impl FileModelsConfig {
    /// Parse the configured model, collecting an issue for an empty name.
    pub fn parse_text(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        match &self.text {
            None => (None, Vec::new()),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: "models.text".to_string(),
                    },
                    "models.text: model name cannot be empty",
                )],
            ),
            Some(s) => (Some(Model::from(s.trim())), Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_model() {
        let config = FileModelsConfig {
            text: Some("gpt-4o-mini".to_string()),
        };
        let (model, issues) = config.parse_text();
        assert_eq!(model, Some(Model::Gpt4oMini));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_parse_custom_model() {
        let config = FileModelsConfig {
            text: Some("ft:gpt-4o:acme".to_string()),
        };
        assert_eq!(
            config.parse_text().0,
            Some(Model::Custom("ft:gpt-4o:acme".to_string()))
        );
    }

    #[test]
    fn test_empty_model_is_error() {
        let config = FileModelsConfig {
            text: Some("  ".to_string()),
        };
        let (model, issues) = config.parse_text();
        assert!(model.is_none());
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
