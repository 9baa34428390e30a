//! Configuration file loading for stress-relief
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./stress-relief.toml` or `./.stress-relief.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/stress-relief/config.toml`
//! 4. Fallback: `~/.config/stress-relief/config.toml`
//! 5. Default values
//!
//! API keys are not configuration: they are entered per session.

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_REPORT_FILE, FileConfig, FileGenerationConfig, FileGiphyConfig, FileHttpConfig,
    FileLoggingConfig, FileModelsConfig, FileOpenAiConfig, FileOutputConfig, FileOutputFormat,
    FileProvidersConfig, MAX_IMAGE_RESULT_LIMIT,
};
pub use loader::ConfigLoader;
