//! Application settings loaded from the ini-style config file.

use serde::Deserialize;
use std::env;
use thiserror::Error;

/// Default location of the config file, overridable via `TRAVELPLAN_CONFIG`.
const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Errors raised while loading the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Gemini API settings (`[API-SETTINGS]` section)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub apikey: String,
    pub model: String,
    /// API endpoint prefix; only overridden in tests
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

/// MySQL connection settings (`[DBSETTINGS]` section)
#[derive(Debug, Clone, Deserialize)]
pub struct DbSettings {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    3306
}

/// Process-wide settings, loaded once at startup and read-only afterwards.
///
/// The file keeps the section and key names of the original ini layout:
///
/// ```toml
/// [API-SETTINGS]
/// apikey = "..."
/// model = "gemini-pro"
///
/// [DBSETTINGS]
/// host = "localhost"
/// user = "travelplan"
/// password = "..."
/// database = "travelplan"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(rename = "API-SETTINGS")]
    pub api: ApiSettings,
    #[serde(rename = "DBSETTINGS")]
    pub db: DbSettings,
}

impl Settings {
    /// Load settings from the given file path
    pub fn from_file(path: &str) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Load settings from `TRAVELPLAN_CONFIG`, falling back to `config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        let path =
            env::var("TRAVELPLAN_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::from_file(&path)
    }
}
