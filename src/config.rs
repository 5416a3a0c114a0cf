//! Configuration file support for ard-aktuell.
//!
//! This module provides functionality for loading and saving the user
//! settings (quality tier, archive mode, disclaimer agreement) from a TOML
//! file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// User configuration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Quality tier: 0-3 video (best to smallest), 4 audio only
    #[serde(default)]
    pub quality: u32,

    /// Browse every item of a broadcast instead of only the latest one
    #[serde(default)]
    pub archive: bool,

    /// Whether the disclaimer has been accepted
    #[serde(default)]
    pub agreement: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self {
            quality: 0,
            archive: false,
            agreement: false,
        }
    }

    /// Get the path to the config file.
    ///
    /// Returns ~/.config/ard-aktuell/settings.toml on Linux,
    /// or a platform-appropriate location on other systems.
    pub fn get_config_path() -> std::result::Result<PathBuf, io::Error> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Could not find config directory")
            })?
            .join("ard-aktuell");

        Ok(config_dir.join("settings.toml"))
    }

    /// Load config from `path`.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to `path`.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_has_defaults() {
        let config = Config::new();
        assert_eq!(config.quality, 0);
        assert!(!config.archive);
        assert!(!config.agreement);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            quality: 4,
            archive: true,
            agreement: true,
        };

        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("quality = 4"));
        assert!(toml_str.contains("archive = true"));
        assert!(toml_str.contains("agreement = true"));
    }

    #[test]
    fn test_config_partial_deserialization() {
        // Only specify some fields, rest should use defaults
        let config: Config = toml::from_str("archive = true").unwrap();
        assert!(config.archive);
        assert_eq!(config.quality, 0); // default
        assert!(!config.agreement); // default
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("ard-aktuell-missing/settings.toml");
        assert_eq!(Config::load_from(&path).unwrap(), Config::new());
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("ard-aktuell-config-{}", std::process::id()));
        let path = dir.join("settings.toml");
        let config = Config {
            quality: 2,
            archive: true,
            agreement: false,
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        let _ = fs::remove_dir_all(&dir);
    }
}
