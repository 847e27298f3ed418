//! Configuration management module.
//!
//! Handles loading and saving application configuration from JSON file.

use crate::core::cell_model::CellModel;
use crate::utils::file_helper;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILE_NAME: &str = "led_animator_config.json";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_animations_dir")]
    pub animations_dir: String,
    #[serde(default)]
    pub cell_model: CellModel,
    #[serde(default = "default_speed_ms")]
    pub default_speed_ms: u64,
    #[serde(default = "default_side")]
    pub default_height: usize,
    #[serde(default = "default_side")]
    pub default_width: usize,
}

fn default_animations_dir() -> String {
    "saved_animations".to_string()
}

fn default_speed_ms() -> u64 {
    1000
}

fn default_side() -> usize {
    8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            animations_dir: default_animations_dir(),
            cell_model: CellModel::default(),
            default_speed_ms: default_speed_ms(),
            default_height: default_side(),
            default_width: default_side(),
        }
    }
}

/// Configuration manager for loading/saving config.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_path(file_helper::exe_directory().join(CONFIG_FILE_NAME))
    }

    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    /// Get the config file path.
    pub fn config_file_path(&self) -> &Path {
        &self.config_path
    }

    /// Directory that holds saved animations, resolved against the config file location.
    pub fn animations_dir(&self, config: &Config) -> PathBuf {
        let base = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        file_helper::resolve(&base, &config.animations_dir)
    }

    /// Load configuration from file, falling back to defaults.
    pub fn load(&self) -> Config {
        let mut config = match self.try_load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                debug!("No config at {}, writing defaults", self.config_path.display());
                let config = Config::default();
                if let Err(e) = self.save(&config) {
                    warn!("Could not write default config {}: {:#}", self.config_path.display(), e);
                }
                config
            }
            Err(e) => {
                warn!("Ignoring unreadable config {}: {:#}", self.config_path.display(), e);
                Config::default()
            }
        };

        // Set defaults if empty
        if config.animations_dir.trim().is_empty() {
            config.animations_dir = default_animations_dir();
        }
        if config.default_speed_ms == 0 {
            config.default_speed_ms = default_speed_ms();
        }
        if config.default_height == 0 {
            config.default_height = default_side();
        }
        if config.default_width == 0 {
            config.default_width = default_side();
        }

        config
    }

    fn try_load(&self) -> anyhow::Result<Option<Config>> {
        if !self.config_path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.config_path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Save configuration to file.
    pub fn save(&self, config: &Config) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, json)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
