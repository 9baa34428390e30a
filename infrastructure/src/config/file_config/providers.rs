//! Provider configuration from TOML (`[providers]` section)
//!
//! Only endpoints and request tuning live here. API keys are supplied per
//! session and are never read from configuration.

use crate::giphy::{DEFAULT_GIPHY_BASE_URL, DEFAULT_RATING, VALID_RATINGS};
use crate::openai::DEFAULT_OPENAI_BASE_URL;
use relief_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Base URL for the OpenAI API (can point at a compatible server).
    pub base_url: String,
    /// Sampling temperature; the API default applies when unset.
    pub temperature: Option<f32>,
    /// Max tokens per response; the API default applies when unset.
    pub max_tokens: Option<u32>,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            temperature: None,
            max_tokens: None,
        }
    }
}

/// Giphy API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGiphyConfig {
    pub base_url: String,
    /// Content rating filter: g, pg, pg-13 or r
    pub rating: String,
}

impl Default for FileGiphyConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GIPHY_BASE_URL.to_string(),
            rating: DEFAULT_RATING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Giphy API settings.
    pub giphy: FileGiphyConfig,
}

impl FileProvidersConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("providers.openai.base_url", &self.openai.base_url),
            ("providers.giphy.base_url", &self.giphy.base_url),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{}: cannot be empty", field),
                ));
            }
        }

        if let Some(t) = self.openai.temperature
            && !(0.0..=2.0).contains(&t)
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "providers.openai.temperature".to_string(),
                    value: t.to_string(),
                },
                format!("providers.openai.temperature: {} is outside 0.0..=2.0", t),
            ));
        }

        if self.openai.max_tokens == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "providers.openai.max_tokens".to_string(),
                    value: "0".to_string(),
                },
                "providers.openai.max_tokens: must be at least 1",
            ));
        }

        let rating = self.giphy.rating.to_lowercase();
        if !VALID_RATINGS.contains(&rating.as_str()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidEnumValue {
                    field: "providers.giphy.rating".to_string(),
                    value: self.giphy.rating.clone(),
                    valid_values: VALID_RATINGS.iter().map(|s| s.to_string()).collect(),
                },
                format!(
                    "providers.giphy.rating: unknown value '{}', falling back to '{}'",
                    self.giphy.rating, DEFAULT_RATING
                ),
            ));
        }

        issues
    }

    /// Rating to send, lowercased, or the default when unknown
    pub fn giphy_rating(&self) -> String {
        let rating = self.giphy.rating.to_lowercase();
        if VALID_RATINGS.contains(&rating.as_str()) {
            rating
        } else {
            DEFAULT_RATING.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FileProvidersConfig::default();
        assert!(config.validate().is_empty());
        assert_eq!(config.giphy_rating(), "g");
    }

    #[test]
    fn test_temperature_out_of_range() {
        let mut config = FileProvidersConfig::default();
        config.openai.temperature = Some(3.5);
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_unknown_rating_falls_back() {
        let mut config = FileProvidersConfig::default();
        config.giphy.rating = "nc-17".to_string();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(config.giphy_rating(), "g");
    }

    #[test]
    fn test_rating_case_insensitive() {
        let mut config = FileProvidersConfig::default();
        config.giphy.rating = "PG-13".to_string();
        assert!(config.validate().is_empty());
        assert_eq!(config.giphy_rating(), "pg-13");
    }
}
