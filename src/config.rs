//! User settings loaded from `~/.cupfinals/config.json`

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use directories::BaseDirs;
use serde::Deserialize;

use crate::types::{CupError, Metric, Result};

/// Name of the per-user data directory under `$HOME`
pub const APP_DIR: &str = ".cupfinals";

/// Color scheme selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background
    #[default]
    Auto,
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub theme: ThemeChoice,
    /// Metric the map opens with
    pub default_metric: Metric,
    /// `tracing_subscriber::EnvFilter` directive, e.g. "cupfinals=debug"
    pub log_filter: Option<String>,
}

impl Settings {
    /// `~/.cupfinals`, if a home directory exists
    pub fn app_dir() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(APP_DIR))
    }

    /// Default settings file location
    pub fn default_path() -> Option<PathBuf> {
        Self::app_dir().map(|dir| dir.join("config.json"))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// A missing default file yields defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CupError::Settings(format!("cannot read {}: {}", path.display(), e))
        })?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| CupError::Settings(format!("{}: {}", path.display(), e)))?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
