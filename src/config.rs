// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedCompare";

/// How the reveal divider is driven.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlMode {
    /// Draggable handle over the image stack.
    #[default]
    Handle,
    /// Native slider control below the pane.
    Slider,
}

impl ControlMode {
    pub const ALL: [ControlMode; 2] = [ControlMode::Handle, ControlMode::Slider];

    /// i18n key for the mode's display name.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ControlMode::Handle => "control-mode-handle",
            ControlMode::Slider => "control-mode-slider",
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlMode::Handle => write!(f, "Handle"),
            ControlMode::Slider => write!(f, "Slider"),
        }
    }
}

/// Surface drawn behind the compared images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundTheme {
    Light,
    Dark,
    /// Alternating tiles, useful when comparing formats with transparency.
    #[default]
    Checkerboard,
}

impl BackgroundTheme {
    pub const ALL: [BackgroundTheme; 3] = [
        BackgroundTheme::Light,
        BackgroundTheme::Dark,
        BackgroundTheme::Checkerboard,
    ];

    pub fn i18n_key(&self) -> &'static str {
        match self {
            BackgroundTheme::Light => "background-light",
            BackgroundTheme::Dark => "background-dark",
            BackgroundTheme::Checkerboard => "background-checkerboard",
        }
    }
}

impl fmt::Display for BackgroundTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundTheme::Light => write!(f, "Light"),
            BackgroundTheme::Dark => write!(f, "Dark"),
            BackgroundTheme::Checkerboard => write!(f, "Checkerboard"),
        }
    }
}

/// Window theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub control_mode: Option<ControlMode>,
    #[serde(default)]
    pub divider_percent: Option<f32>,
    #[serde(default)]
    pub background_theme: Option<BackgroundTheme>,
    #[serde(default)]
    pub theme_mode: Option<ThemeMode>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            control_mode: Some(ControlMode::default()),
            divider_percent: Some(DEFAULT_DIVIDER_PERCENT),
            background_theme: Some(BackgroundTheme::default()),
            theme_mode: Some(ThemeMode::default()),
        }
    }
}

pub const DEFAULT_DIVIDER_PERCENT: f32 = 50.0;

/// Keeps persisted divider positions inside the valid percentage range.
pub fn clamp_divider_percent(value: f32) -> f32 {
    value.clamp(0.0, 100.0)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let config = Config {
            language: Some("fr".to_string()),
            control_mode: Some(ControlMode::Slider),
            divider_percent: Some(25.0),
            background_theme: Some(BackgroundTheme::Dark),
            theme_mode: Some(ThemeMode::Light),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.language, config.language);
        assert_eq!(loaded.control_mode, config.control_mode);
        assert_eq!(loaded.divider_percent, config.divider_percent);
        assert_eq!(loaded.background_theme, config.background_theme);
        assert_eq!(loaded.theme_mode, config.theme_mode);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("deep").join("path");
        let config_path = nested_dir.join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_sets_mode_and_divider() {
        let config = Config::default();
        assert_eq!(config.control_mode, Some(ControlMode::Handle));
        assert_eq!(config.divider_percent, Some(DEFAULT_DIVIDER_PERCENT));
        assert_eq!(config.background_theme, Some(BackgroundTheme::Checkerboard));
    }

    #[test]
    fn clamp_divider_percent_bounds_values() {
        assert_eq!(clamp_divider_percent(-3.0), 0.0);
        assert_eq!(clamp_divider_percent(50.0), 50.0);
        assert_eq!(clamp_divider_percent(140.0), 100.0);
    }
}
