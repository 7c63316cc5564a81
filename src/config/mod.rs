//! Configuration module for quickswitch
//!
//! Manages listing limits, ignored names and log verbosity.
//! Configuration is stored in the user's config directory.

use std::fs;
use std::path::{Path, PathBuf};
use config::{Config, ConfigError, File, FileFormat};
use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::lister::{DEFAULT_IGNORED, DEFAULT_MAX_FILES, ProjectFileLister};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SwitcherConfig {
    /// Most files listed per project before the list is truncated
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Directory and file names skipped while listing
    #[serde(default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,

    /// Log level when no `-v` flag is given (off, error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            ignore_dirs: default_ignore_dirs(),
            log_level: default_log_level(),
        }
    }
}

const fn default_max_files() -> usize {
    DEFAULT_MAX_FILES
}

fn default_ignore_dirs() -> Vec<String> {
    DEFAULT_IGNORED.iter().map(|name| (*name).to_string()).collect()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SwitcherConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("quickswitch").join("config.toml"))
    }

    /// Load configuration from the user config file, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Configured log level, `warn` when unparseable
    #[must_use]
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Warn)
    }

    /// Build a filesystem lister from these settings
    #[must_use]
    pub fn lister(&self) -> ProjectFileLister {
        ProjectFileLister::new(self.max_files, self.ignore_dirs.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SwitcherConfig::default();
        assert_eq!(config.max_files, 10_000);
        assert!(config.ignore_dirs.iter().any(|d| d == "node_modules"));
        assert_eq!(config.level_filter(), LevelFilter::Warn);
    }

    #[test]
    fn test_load_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = SwitcherConfig::load_from(&path).unwrap();
        assert_eq!(config, SwitcherConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = SwitcherConfig {
            max_files: 42,
            ignore_dirs: vec!["out".into()],
            log_level: "debug".into(),
        };
        config.save_to(&path).unwrap();

        let loaded = SwitcherConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.level_filter(), LevelFilter::Debug);
        assert_eq!(loaded.lister().max_files(), 42);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "max_files = 5\n").unwrap();

        let config = SwitcherConfig::load_from(&path).unwrap();
        assert_eq!(config.max_files, 5);
        assert_eq!(config.ignore_dirs, default_ignore_dirs());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_bad_log_level_falls_back() {
        let config = SwitcherConfig {
            log_level: "loud".into(),
            ..SwitcherConfig::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Warn);
    }
}
