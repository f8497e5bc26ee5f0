use std::path::{Path, PathBuf};

use log::LevelFilter;
use serde::Deserialize;

/// User configuration, loaded from the platform config dir. Missing or
/// malformed files fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}

impl Config {
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::from_path(&path),
            None => Self::default(),
        }
    }

    pub fn from_path(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|contents| toml::from_str(&contents).ok())
            .unwrap_or_default()
    }

    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("paramdeck"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("paramdeck.log"))
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level.as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "warn" => LevelFilter::Warn,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Info,
        }
    }
}
