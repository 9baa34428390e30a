//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["stress-relief.toml", ".stress-relief.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./stress-relief.toml` or `./.stress-relief.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/stress-relief/config.toml`
    /// 4. Fallback: `~/.config/stress-relief/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path,
        )
    }

    /// Merge the given files over the defaults, lowest priority first.
    ///
    /// Missing global and project files are skipped; a missing explicit
    /// file is an error.
    pub fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/stress-relief/config.toml if set,
    /// otherwise falls back to ~/.config/stress-relief/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("stress-relief").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", mark, path.display());
        }

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./stress-relief.toml or ./.stress-relief.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
