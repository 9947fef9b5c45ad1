//! User settings, persisted as TOML.
//!
//! Settings live in the platform config folder:
//! - Linux: ~/.config/wordle-game/settings.toml
//! - macOS: ~/Library/Application Support/com.wordle-game.Wordle Game/settings.toml
//! - Windows: %APPDATA%/wordle-game/Wordle Game/config/settings.toml
//!
//! Every field has a default, so a partial file only overrides what it names.

use crate::error::ConfigError;
use crate::game::DEFAULT_WORD_LENGTH;
use crate::oracle::{DEFAULT_DICTIONARY_URL, DEFAULT_TIMEOUT};
use crate::storage::{APP_NAME, APP_ORG, APP_QUALIFIER};
use crate::wordlists::target::DEFAULT_EPOCH;
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILENAME: &str = "settings.toml";

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: GameSettings,
    pub dictionary: DictionarySettings,
    pub daily: DailySettings,
}

/// Round setup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Word length for a brand new session.
    pub default_length: usize,
    /// Extra accepted guesses, one word per line.
    pub word_list: Option<PathBuf>,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_WORD_LENGTH,
            word_list: None,
        }
    }
}

/// Remote dictionary lookups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionarySettings {
    /// Use the remote dictionary; when false only the word lists are consulted.
    pub enabled: bool,
    pub url: String,
    pub timeout_ms: u64,
}

impl Default for DictionarySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_DICTIONARY_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

impl DictionarySettings {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Daily word rotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailySettings {
    /// First day of the rotation, `YYYY-MM-DD`.
    pub epoch: String,
}

impl Default for DailySettings {
    fn default() -> Self {
        Self {
            epoch: DEFAULT_EPOCH.format("%Y-%m-%d").to_string(),
        }
    }
}

impl DailySettings {
    /// Parsed epoch; an unparseable value falls back to the default
    #[must_use]
    pub fn epoch_date(&self) -> NaiveDate {
        NaiveDate::parse_from_str(self.epoch.trim(), "%Y-%m-%d").unwrap_or_else(|e| {
            tracing::warn!("Invalid daily epoch {:?}: {}, using default", self.epoch, e);
            DEFAULT_EPOCH
        })
    }
}

/// Get the path to the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
#[must_use]
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Load settings from the platform config folder.
///
/// Returns default settings if the file is missing or unreadable, or if the
/// platform directory cannot be determined.
#[must_use]
pub fn load_settings() -> Settings {
    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Settings::default();
    };
    load_settings_from(&path)
}

/// Load settings from an explicit file, falling back to defaults.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                tracing::warn!("Failed to parse settings file: {}, using defaults", e);
                Settings::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No settings file found at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            tracing::warn!("Failed to read settings file: {}, using defaults", e);
            Settings::default()
        }
    }
}

/// Save settings to the platform config folder.
///
/// # Errors
/// Returns `ConfigError` if the directory cannot be determined or the file
/// cannot be written.
pub fn save_settings(settings: &Settings) -> Result<PathBuf, ConfigError> {
    let path = settings_path().ok_or(ConfigError::NoConfigDir)?;
    save_settings_to(&path, settings)?;
    Ok(path)
}

/// Save settings to an explicit file, creating its directory.
///
/// # Errors
/// Returns `ConfigError` if serialization or writing fails.
pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content).map_err(write_err)?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(settings.game.default_length, 5);
        assert!(settings.dictionary.enabled);
        assert_eq!(settings.dictionary.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(settings.daily.epoch_date(), DEFAULT_EPOCH);
    }

    #[test]
    fn partial_file_overrides_only_named_fields() {
        let settings: Settings = toml::from_str(
            r#"
            [game]
            default_length = 7

            [dictionary]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(settings.game.default_length, 7);
        assert!(!settings.dictionary.enabled);
        assert_eq!(settings.dictionary.url, DEFAULT_DICTIONARY_URL);
        assert_eq!(settings.daily, DailySettings::default());
    }

    #[test]
    fn bad_epoch_falls_back() {
        let daily = DailySettings {
            epoch: "next tuesday".to_string(),
        };
        assert_eq!(daily.epoch_date(), DEFAULT_EPOCH);

        let daily = DailySettings {
            epoch: "2025-06-01".to_string(),
        };
        assert_eq!(daily.epoch_date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("conf/settings.toml");

        let mut settings = Settings::default();
        settings.game.default_length = 6;
        settings.dictionary.timeout_ms = 750;
        save_settings_to(&path, &settings).unwrap();

        assert_eq!(load_settings_from(&path), settings);
    }

    #[test]
    fn missing_or_broken_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            load_settings_from(&dir.path().join("none.toml")),
            Settings::default()
        );

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[game\ndefault_length = ").unwrap();
        assert_eq!(load_settings_from(&broken), Settings::default());
    }
}
