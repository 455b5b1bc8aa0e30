use crate::model::Rgba;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

/// How committed connector lines pick their endpoints.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConnectorRouting {
    /// Closest pair of side midpoints, same as the live preview.
    #[default]
    NearestAnchor,
    /// Fixed `center + size / 2` offset on both ends.
    CornerOffset,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub font_size: f32,
    pub padding: f32,
    pub padding_between: f32,
    pub corner_radius: f32,
    pub anchor_clearance: f32,
    pub blink_interval_ms: u64,
    pub default_background: Rgba,
    pub canvas_background: Rgba,
    pub connector_routing: ConnectorRouting,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            padding: 8.0,
            padding_between: 2.0,
            corner_radius: 10.0,
            anchor_clearance: 6.0,
            blink_interval_ms: 500,
            default_background: Rgba::rgb(0xf5, 0xf5, 0xf5),
            canvas_background: Rgba::rgb(0xff, 0xff, 0xff),
            connector_routing: ConnectorRouting::NearestAnchor,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid TOML in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// First existing settings file: `~/.config/linkpad.toml`, `settings.toml`, `settings.json`.
pub fn config_path() -> Option<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(home) = std::env::var_os("HOME") {
        candidates.push(PathBuf::from(home).join(".config").join("linkpad.toml"));
    }
    candidates.push(PathBuf::from("settings.toml"));
    candidates.push(PathBuf::from("settings.json"));
    candidates.into_iter().find(|p| p.exists())
}

/// Parses a settings file, picking the format by extension and falling back to the other one.
pub fn load_settings(path: &Path) -> Result<AppSettings, SettingsError> {
    let s = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path.extension().is_some_and(|ext| ext == "json");
    if is_json {
        serde_json::from_str::<AppSettings>(&s).or_else(|source| {
            toml::from_str::<AppSettings>(&s).map_err(|_| SettingsError::Json {
                path: path.to_path_buf(),
                source,
            })
        })
    } else {
        toml::from_str::<AppSettings>(&s).or_else(|source| {
            serde_json::from_str::<AppSettings>(&s).map_err(|_| SettingsError::Toml {
                path: path.to_path_buf(),
                source,
            })
        })
    }
}

/// Resolves and loads settings, logging and falling back to defaults on any failure.
pub fn load_or_default() -> AppSettings {
    let Some(path) = config_path() else {
        tracing::info!("no settings file found, using defaults");
        return AppSettings::default();
    };
    match load_settings(&path) {
        Ok(settings) => {
            tracing::info!(path = %path.display(), "settings loaded");
            settings
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring settings file");
            AppSettings::default()
        }
    }
}
