//! User settings persistence.
//!
//! This module handles loading and saving user preferences across sessions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::info::DEFAULT_INFO_TEMPLATE;

/// User settings that persist across sessions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Use the colorblind-friendly chart palette
    #[serde(default)]
    pub color_blind_mode: bool,
    /// Draw per-run markers on top of the series lines
    #[serde(default = "default_show_points")]
    pub show_points: bool,
    /// Info header template; `{{reponame}}`, `{{firstrun}}` and
    /// `{{lastrun}}` are substituted, anything else passes through
    #[serde(default = "default_info_template")]
    pub info_template: String,
}

fn default_version() -> u32 {
    1
}

fn default_show_points() -> bool {
    true
}

fn default_info_template() -> String {
    DEFAULT_INFO_TEMPLATE.to_string()
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            color_blind_mode: false,
            show_points: true,
            info_template: DEFAULT_INFO_TEMPLATE.to_string(),
        }
    }
}

impl UserSettings {
    /// Get the config directory path for QuickView
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("QuickView"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("QuickView"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|p| p.join("quickview"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            dirs::config_dir().map(|p| p.join("quickview"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk, falling back to defaults.
    ///
    /// A present-but-unreadable settings file is reported and replaced by
    /// defaults rather than aborting startup.
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("settings file {} is not valid: {e}", path.display());
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("could not read settings file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_settings_path()
            .ok_or_else(|| "Could not determine config directory".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write settings file: {}", e))?;

        Ok(())
    }
}
