// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Interface language
//! - `[gallery]` - Placeholder image service
//! - `[window]` - Initial window size
//!
//! Every section and key is optional. The file is read once at startup and
//! never written: view preferences such as dark mode are not persisted.
//!
//! # Path Resolution
//!
//! 1. Use [`load_from_path`] with an explicit path
//! 2. `--config-dir` CLI argument or `ICED_FOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config;
//!
//! // Load configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("using defaults: {key}");
//! }
//! println!("images from {}", config.gallery.image_base());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing config file cannot be used.
pub const LOAD_ERROR_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// Interface language in BCP-47 form (e.g. `fr`, `en-US`).
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Base locator of the placeholder image service.
    #[serde(default)]
    pub image_base: Option<String>,
}

impl GalleryConfig {
    /// Configured image base, or [`DEFAULT_IMAGE_BASE`] when unset or blank.
    #[must_use]
    pub fn image_base(&self) -> &str {
        self.image_base
            .as_deref()
            .map(str::trim)
            .filter(|base| !base.is_empty())
            .unwrap_or(DEFAULT_IMAGE_BASE)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default)]
    pub width: Option<f32>,

    #[serde(default)]
    pub height: Option<f32>,
}

impl WindowConfig {
    /// Initial window size, clamped to the supported range.
    #[must_use]
    pub fn size(&self) -> (f32, f32) {
        let width = clamp_dimension(self.width, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_WIDTH);
        let height = clamp_dimension(self.height, DEFAULT_WINDOW_HEIGHT, MIN_WINDOW_HEIGHT);
        (width, height)
    }
}

fn clamp_dimension(value: Option<f32>, default: f32, min: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() => v.clamp(min, MAX_WINDOW_DIMENSION),
        _ => default,
    }
}

/// Root configuration, one field per `settings.toml` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional_warning). A missing file yields the
/// defaults without a warning; an unreadable or invalid file yields the
/// defaults with a warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "ignoring config file");
                    return (Config::default(), Some(LOAD_ERROR_WARNING.to_string()));
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_from_path_reads_all_sections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(
            &config_path,
            r#"
[general]
language = "fr"

[gallery]
image_base = "/srv/photos"

[window]
width = 700.0
height = 900.0
"#,
        )
        .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.gallery.image_base(), "/srv/photos");
        assert_eq!(loaded.window.size(), (700.0, 900.0));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "[general]\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, Config::default());
        assert_eq!(loaded.gallery.image_base(), DEFAULT_IMAGE_BASE);
    }

    #[test]
    fn load_from_path_errors_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn load_with_override_warns_and_falls_back_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[window]\nwidth = \"wide\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_WARNING));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn blank_image_base_falls_back_to_default() {
        let gallery = GalleryConfig {
            image_base: Some("   ".to_string()),
        };
        assert_eq!(gallery.image_base(), DEFAULT_IMAGE_BASE);
    }

    #[test]
    fn window_size_is_clamped() {
        let window = WindowConfig {
            width: Some(10.0),
            height: Some(1.0e6),
        };
        assert_eq!(window.size(), (MIN_WINDOW_WIDTH, MAX_WINDOW_DIMENSION));

        let window = WindowConfig {
            width: Some(f32::NAN),
            height: None,
        };
        assert_eq!(window.size(), (DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT));
    }
}
