//! Configuration management
//!
//! Settings live in settings.json inside the waterlog directory:
//! ```json
//! {
//!   "app": { "dataFile": "water_data.csv", ... }
//! }
//! ```
//! Keys the CLI does not manage are preserved on save.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Name of the data file when nothing overrides it
pub const DEFAULT_DATA_FILE: &str = "water_data.csv";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    /// Data file path, relative to the waterlog directory unless absolute
    #[serde(default)]
    data_file: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Waterlog configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub data_file: Option<String>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Config {
    /// Load config from the waterlog directory
    ///
    /// The data file can be set via:
    /// 1. Environment variable WATERLOG_DATA_FILE (for CI/testing)
    /// 2. Settings file (`app.dataFile`)
    /// 3. Default: water_data.csv in the waterlog directory
    pub fn load(waterlog_dir: &Path) -> Result<Self> {
        let settings_path = waterlog_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let data_file = std::env::var("WATERLOG_DATA_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| raw.app.data_file.clone());

        Ok(Self {
            data_file,
            _raw_settings: raw,
        })
    }

    /// Save config to the waterlog directory
    /// Preserves other settings that the CLI doesn't manage
    pub fn save(&self, waterlog_dir: &Path) -> Result<()> {
        let settings_path = waterlog_dir.join("settings.json");

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.data_file = self.data_file.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Resolve the data file path against the waterlog directory
    pub fn data_path(&self, waterlog_dir: &Path) -> PathBuf {
        match &self.data_file {
            Some(file) => {
                let path = PathBuf::from(file);
                if path.is_absolute() {
                    path
                } else {
                    waterlog_dir.join(path)
                }
            }
            None => waterlog_dir.join(DEFAULT_DATA_FILE),
        }
    }
}
