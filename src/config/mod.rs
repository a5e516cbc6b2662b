// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and dark-mode preference
//! - `[upload]` - Metadata-extraction endpoint
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set the `PROMPTLENS_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use promptlens::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.dark_mode = Some(true);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Stored dark-mode choice. Absent until the user toggles once, in which
    /// case the ambient OS color scheme decides the initial theme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
}

/// Upload settings for the metadata-extraction service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UploadConfig {
    /// Full URL of the extraction endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub upload: UploadConfig,
}

impl Config {
    /// The configured extraction endpoint, or the built-in default.
    pub fn endpoint(&self) -> String {
        self.upload
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }
}

fn config_file_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Returns a tuple of (config, optional warning). A missing file yields the
/// defaults silently; an unreadable or unparsable file yields the defaults
/// with a warning message suitable for display.
pub fn load() -> (Config, Option<String>) {
    match config_file_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => (Config::default(), None),
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from_path(path: &Path) -> (Config, Option<String>) {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            return (
                Config::default(),
                Some(format!(
                    "Could not read {}; using default settings",
                    path.display()
                )),
            );
        }
    };

    match toml::from_str(&content) {
        Ok(config) => (config, None),
        Err(_) => (
            Config::default(),
            Some(format!(
                "Could not parse {}; using default settings",
                path.display()
            )),
        ),
    }
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = config_file_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
