// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[slideshow]` - Home slideshow cadence
//! - `[gallery]` - Assets location for catalog images
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("de-DE".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "de-DE").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Home slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Whether the slideshow advances on its own.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Delay between automatic advances, in seconds.
    #[serde(
        default = "default_interval_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_secs: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            interval_secs: default_interval_secs(),
        }
    }
}

impl SlideshowConfig {
    /// Effective tick interval, clamped to the supported range.
    #[must_use]
    pub fn interval(&self) -> Duration {
        let secs = self
            .interval_secs
            .unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_SECS)
            .clamp(MIN_SLIDESHOW_INTERVAL_SECS, MAX_SLIDESHOW_INTERVAL_SECS);
        Duration::from_secs(secs)
    }

    /// Effective autoplay flag.
    #[must_use]
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.unwrap_or(DEFAULT_SLIDESHOW_AUTOPLAY)
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    /// Directory holding the catalog images, when not using `./assets`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Home slideshow settings.
    #[serde(default)]
    pub slideshow: SlideshowConfig,

    /// Gallery settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_SLIDESHOW_AUTOPLAY)
}

fn default_interval_secs() -> Option<u64> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (Config::default(), Some("warning-config-load".to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("de-DE".to_string()),
                theme_mode: ThemeMode::Light,
            },
            slideshow: SlideshowConfig {
                autoplay: Some(false),
                interval_secs: Some(8),
            },
            gallery: GalleryConfig {
                assets_dir: Some(PathBuf::from("/srv/portfolio")),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(message)) => assert!(!message.is_empty()),
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_missing_file_gives_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn load_with_override_malformed_file_warns_and_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nbroken")
            .expect("failed to write malformed config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("warning-config-load"));
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join(CONFIG_FILE);

        save_to_path(&Config::default(), &config_path).expect("failed to save config");
        assert!(config_path.exists());
    }

    #[test]
    fn partial_config_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\nlanguage = \"de-DE\"\n")
            .expect("failed to write partial config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.general.language.as_deref(), Some("de-DE"));
        assert_eq!(config.slideshow, SlideshowConfig::default());
        assert!(config.gallery.assets_dir.is_none());
    }

    #[test]
    fn theme_mode_parses_case_insensitively() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\ntheme_mode = \"DARK\"\n")
            .expect("failed to write config");

        let config = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn interval_is_clamped_to_supported_range() {
        let slideshow = SlideshowConfig {
            autoplay: Some(true),
            interval_secs: Some(0),
        };
        assert_eq!(
            slideshow.interval(),
            Duration::from_secs(MIN_SLIDESHOW_INTERVAL_SECS)
        );

        let slideshow = SlideshowConfig {
            autoplay: Some(true),
            interval_secs: Some(600),
        };
        assert_eq!(
            slideshow.interval(),
            Duration::from_secs(MAX_SLIDESHOW_INTERVAL_SECS)
        );
    }

    #[test]
    fn default_interval_is_five_seconds() {
        let slideshow = SlideshowConfig::default();
        assert_eq!(slideshow.interval(), Duration::from_secs(5));
        assert!(slideshow.autoplay_enabled());
    }
}
