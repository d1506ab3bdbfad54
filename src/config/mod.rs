use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod settings; // resolved per-run values, see src/config/settings.rs

pub use settings::Settings;

/// User defaults, read from `~/.ics2csv/ics2csv.conf` (YAML) when present.
/// Every key is optional; command-line flags always win.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub csv: String,
    pub name: String,
    pub delimiter: String,
    pub header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv: "out.csv".to_string(),
            name: "yourName".to_string(),
            delimiter: "\t".to_string(),
            header: false,
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.ics2csv`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ics2csv")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ics2csv.conf")
    }

    /// Load the default config file, or return defaults if it does not exist
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load an explicit config file; a missing file is an error here.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read '{}': {e}", path.display()))
        })?;

        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("cannot parse '{}': {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // an empty file deserializes to `null`, which means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
