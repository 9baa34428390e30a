//! Pipeline configuration from TOML (`[generation]` section)

use relief_application::DEFAULT_IMAGE_RESULT_LIMIT;
use relief_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Largest page the image search endpoint returns
pub const MAX_IMAGE_RESULT_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Image-search results offered to the model per paragraph
    pub image_result_limit: usize,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            image_result_limit: DEFAULT_IMAGE_RESULT_LIMIT,
        }
    }
}

impl FileGenerationConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let limit = self.image_result_limit;
        if limit == 0 {
            vec![ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "generation.image_result_limit".to_string(),
                    value: limit.to_string(),
                },
                "generation.image_result_limit: must be at least 1",
            )]
        } else if limit > MAX_IMAGE_RESULT_LIMIT {
            vec![ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "generation.image_result_limit".to_string(),
                    value: limit.to_string(),
                },
                format!(
                    "generation.image_result_limit: {} exceeds the search page size, at most {} results will come back",
                    limit, MAX_IMAGE_RESULT_LIMIT
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_domain::Severity;

    #[test]
    fn test_default_is_valid() {
        assert!(FileGenerationConfig::default().validate().is_empty());
    }

    #[test]
    fn test_zero_limit_is_error() {
        let issues = FileGenerationConfig {
            image_result_limit: 0,
        }
        .validate();
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_large_limit_is_warning() {
        let issues = FileGenerationConfig {
            image_result_limit: 100,
        }
        .validate();
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
