//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod http;
mod logging;
mod models;
mod output;
mod providers;

pub use generation::{FileGenerationConfig, MAX_IMAGE_RESULT_LIMIT};
pub use http::FileHttpConfig;
pub use logging::FileLoggingConfig;
pub use models::FileModelsConfig;
pub use output::{DEFAULT_REPORT_FILE, FileOutputConfig, FileOutputFormat};
pub use providers::{FileGiphyConfig, FileOpenAiConfig, FileProvidersConfig};

use relief_application::GenerationParams;
use relief_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text-generation model
    pub models: FileModelsConfig,
    /// Pipeline bounds
    pub generation: FileGenerationConfig,
    /// OpenAI and Giphy endpoints
    pub providers: FileProvidersConfig,
    /// HTTP client settings
    pub http: FileHttpConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Conversation transcript
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.models.parse_text().1);
        issues.extend(self.generation.validate());
        issues.extend(self.providers.validate());
        issues.extend(self.http.validate());
        issues
    }

    /// Pipeline parameters with invalid values replaced by defaults.
    pub fn generation_params(&self) -> GenerationParams {
        let mut params = GenerationParams::default();
        if let (Some(model), _) = self.models.parse_text() {
            params = params.with_model(model);
        }
        params.with_image_result_limit(self.generation.image_result_limit)
    }
}
