// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! This module provides a single source of truth for the config and
//! assets locations, so every component resolves them the same way.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--assets-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_FOLIO_CONFIG_DIR`, `ICED_FOLIO_ASSETS_DIR`)
//! 4. **Default** - platform config directory via `dirs`, or `./assets` for media
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.assets_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedFolio";

/// Directory searched for catalog images when nothing else is configured.
const DEFAULT_ASSETS_DIR: &str = "assets";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "ICED_FOLIO_ASSETS_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for assets directory (set once at startup).
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and assets directories.
///
/// This should be called once at application startup, before any path
/// resolution functions are called.
///
/// # Panics
///
/// Panics if called more than once (`OnceLock` can only be set once).
pub fn init_cli_overrides(config_dir: Option<String>, assets_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
    CLI_ASSETS_DIR
        .set(assets_dir.map(PathBuf::from))
        .expect("CLI assets dir override already initialized");
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_assets_dir() -> Option<PathBuf> {
    CLI_ASSETS_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// This directory stores user preferences (`settings.toml`).
///
/// # Resolution Order
///
/// 1. CLI argument `--config-dir` (if set via [`init_cli_overrides`])
/// 2. `ICED_FOLIO_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory:
///    - Linux: `~/.config/IcedFolio/`
///    - macOS: `~/Library/Application Support/IcedFolio/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\IcedFolio\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// The explicit `override_path` has highest priority because it is the
/// most specific; it is how tests point the config layer at a tempdir.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the assets root used to resolve catalog image paths.
///
/// # Resolution Order
///
/// 1. CLI argument `--assets-dir` (if set via [`init_cli_overrides`])
/// 2. `ICED_FOLIO_ASSETS_DIR` environment variable (if set and non-empty)
/// 3. `configured` - the `gallery.assets_dir` setting, when present
/// 4. `./assets` relative to the working directory
pub fn get_assets_dir(configured: Option<&PathBuf>) -> PathBuf {
    if let Some(path) = get_cli_assets_dir() {
        return path;
    }

    if let Ok(env_path) = std::env::var(ENV_ASSETS_DIR) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }

    if let Some(path) = configured {
        return path.clone();
    }

    PathBuf::from(DEFAULT_ASSETS_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
        // If dirs::config_dir() returns None (rare), the test passes silently
    }

    #[test]
    fn app_config_dir_is_absolute() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.is_absolute(), "App config dir should be absolute path");
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        // Cleanup
        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        let result = get_app_config_dir();
        // Should fall back to platform default which contains app name
        if let Some(path) = result {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn assets_dir_prefers_env_over_configured() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "/env/assets");

        let configured = PathBuf::from("/configured/assets");
        assert_eq!(
            get_assets_dir(Some(&configured)),
            PathBuf::from("/env/assets")
        );

        std::env::remove_var(ENV_ASSETS_DIR);
    }

    #[test]
    fn assets_dir_uses_configured_before_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_ASSETS_DIR);

        let configured = PathBuf::from("/configured/assets");
        assert_eq!(get_assets_dir(Some(&configured)), configured);
        assert_eq!(get_assets_dir(None), PathBuf::from(DEFAULT_ASSETS_DIR));
    }
}
