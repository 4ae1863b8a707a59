//! User settings for the energy tracker
//!
//! Manages user preferences: the default electricity rate, the default data
//! file, the currency symbol used for display, and whether the shell saves
//! on exit.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::EnergyError;
use crate::models::Rate;

/// User settings for the energy tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Price per kWh used when no rate is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_rate: Option<f64>,

    /// Appliance CSV used when no file is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Currency symbol for cost output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether the interactive shell writes the store back on quit
    #[serde(default = "default_save_on_exit")]
    pub save_on_exit: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_save_on_exit() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_rate: None,
            data_file: None,
            currency_symbol: default_currency(),
            save_on_exit: default_save_on_exit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, EnergyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| EnergyError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| EnergyError::Config(format!("Failed to parse settings file: {}", e)))?;

        if let Some(rate) = settings.default_rate {
            Rate::new(rate).map_err(|e| {
                EnergyError::Config(format!("Invalid default_rate in settings: {}", e))
            })?;
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), EnergyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| EnergyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| EnergyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The configured default rate, if any
    pub fn rate(&self) -> Option<Rate> {
        self.default_rate.and_then(|r| Rate::new(r).ok())
    }

    /// Resolve the data file: explicit override, then settings, then the default location
    pub fn resolve_data_file(&self, paths: &TrackerPaths, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| paths.default_data_file())
    }
}
