//! String-keyed settings access.
//!
//! The navigator reads its settings through [`SettingsStore`], the same
//! key/value shape a media-center host exposes. [`FileSettings`] backs it
//! with the TOML [`Config`]; [`MemorySettings`] keeps values in memory.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::quality::QualityTier;
use log::debug;
use std::collections::HashMap;
use std::path::PathBuf;

pub const QUALITY: &str = "quality";
pub const ARCHIVE: &str = "archive";
pub const AGREEMENT: &str = "agreement";

/// Host settings, addressed by key.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The two settings that shape the navigation tree, read fresh per request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowseSettings {
    pub quality: QualityTier,
    pub archive: bool,
}

impl BrowseSettings {
    pub fn read(store: &dyn SettingsStore) -> Self {
        Self {
            quality: QualityTier::from_setting(store.get(QUALITY).as_deref()),
            archive: store.get(ARCHIVE).as_deref() == Some("true"),
        }
    }
}

/// In-memory settings.
#[derive(Clone, Debug, Default)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Values in `overrides` shadow `base` for reads; writes go to `base`.
#[derive(Clone, Debug)]
pub struct LayeredSettings<S> {
    pub overrides: MemorySettings,
    pub base: S,
}

impl<S: SettingsStore> LayeredSettings<S> {
    pub fn new(base: S) -> Self {
        Self {
            overrides: MemorySettings::new(),
            base,
        }
    }
}

impl<S: SettingsStore> SettingsStore for LayeredSettings<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.overrides.get(key).or_else(|| self.base.get(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.base.set(key, value)
    }
}

/// Settings persisted in a TOML file. Every `set` is written through.
#[derive(Clone, Debug)]
pub struct FileSettings {
    config: Config,
    path: PathBuf,
}

impl FileSettings {
    pub fn open(path: PathBuf) -> Result<Self> {
        let config = Config::load_from(&path)?;
        debug!("Loaded settings from {}", path.display());
        Ok(Self { config, path })
    }

    /// Open the settings file at the default location.
    pub fn open_default() -> Result<Self> {
        Self::open(Config::get_config_path()?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl SettingsStore for FileSettings {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            QUALITY => Some(self.config.quality.to_string()),
            ARCHIVE => Some(self.config.archive.to_string()),
            AGREEMENT if self.config.agreement => Some("1".to_string()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            QUALITY => {
                self.config.quality = value.trim().parse().map_err(|_| {
                    AppError::InvalidInput(format!("quality must be a number, got '{}'", value))
                })?
            }
            ARCHIVE => self.config.archive = value == "true",
            AGREEMENT => self.config.agreement = value == "1",
            other => return Err(AppError::Config(format!("unknown setting '{}'", other))),
        }

        self.config.save_to(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_settings_defaults() {
        let settings = BrowseSettings::read(&MemorySettings::new());
        assert_eq!(settings, BrowseSettings::default());
    }

    #[test]
    fn test_browse_settings_read() {
        let store = MemorySettings::new()
            .with(QUALITY, "4")
            .with(ARCHIVE, "true");
        let settings = BrowseSettings::read(&store);
        assert!(settings.quality.is_audio_only());
        assert!(settings.archive);
    }

    #[test]
    fn test_archive_needs_exact_true() {
        let store = MemorySettings::new().with(ARCHIVE, "True");
        assert!(!BrowseSettings::read(&store).archive);
    }

    #[test]
    fn test_memory_settings_set() {
        let mut store = MemorySettings::new();
        assert!(store.get(AGREEMENT).is_none());
        store.set(AGREEMENT, "1").unwrap();
        assert_eq!(store.get(AGREEMENT).as_deref(), Some("1"));
    }

    #[test]
    fn test_layered_settings() {
        let base = MemorySettings::new().with(QUALITY, "0").with(ARCHIVE, "true");
        let mut layered = LayeredSettings::new(base);
        layered.overrides = MemorySettings::new().with(QUALITY, "4");

        let settings = BrowseSettings::read(&layered);
        assert!(settings.quality.is_audio_only());
        assert!(settings.archive);

        layered.set(AGREEMENT, "1").unwrap();
        assert_eq!(layered.base.get(AGREEMENT).as_deref(), Some("1"));
        assert!(layered.overrides.get(AGREEMENT).is_none());
    }

    #[test]
    fn test_override_can_turn_archive_off() {
        let base = MemorySettings::new().with(ARCHIVE, "true");
        let mut layered = LayeredSettings::new(base);
        assert!(BrowseSettings::read(&layered).archive);

        layered.overrides = layered.overrides.with(ARCHIVE, &false.to_string());
        assert!(!BrowseSettings::read(&layered).archive);
        assert_eq!(layered.base.get(ARCHIVE).as_deref(), Some("true"));
    }

    #[test]
    fn test_file_settings_write_through() {
        let dir = std::env::temp_dir().join(format!("ard-aktuell-settings-{}", std::process::id()));
        let path = dir.join("settings.toml");

        let mut store = FileSettings::open(path.clone()).unwrap();
        assert!(store.get(AGREEMENT).is_none());
        assert_eq!(store.get(ARCHIVE).as_deref(), Some("false"));

        store.set(AGREEMENT, "1").unwrap();
        store.set(QUALITY, "3").unwrap();

        let reopened = FileSettings::open(path).unwrap();
        assert_eq!(reopened.get(AGREEMENT).as_deref(), Some("1"));
        assert_eq!(reopened.config().quality, 3);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_file_settings_rejects_bad_values() {
        let dir = std::env::temp_dir().join(format!("ard-aktuell-bad-{}", std::process::id()));
        let mut store = FileSettings::open(dir.join("settings.toml")).unwrap();

        assert!(matches!(store.set(QUALITY, "best"), Err(AppError::InvalidInput(_))));
        assert!(matches!(store.set("volume", "3"), Err(AppError::Config(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
