//! Path management for the energy tracker
//!
//! Provides XDG-compliant path resolution for the settings file and the
//! default appliance data file.
//!
//! ## Path Resolution Order
//!
//! 1. `ENERGY_TRACKER_HOME` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/energy-tracker` or `~/.config/energy-tracker`
//! 3. Windows: `%APPDATA%\energy-tracker`

use std::path::PathBuf;

use crate::error::EnergyError;

/// Environment variable that overrides the base directory
pub const HOME_ENV_VAR: &str = "ENERGY_TRACKER_HOME";

/// Manages all paths used by the energy tracker
#[derive(Debug, Clone)]
pub struct TrackerPaths {
    /// Base directory for all energy tracker files
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Create a new TrackerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, EnergyError> {
        let base_dir = match std::env::var(HOME_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/energy-tracker/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the default path of the appliance CSV
    pub fn default_data_file(&self) -> PathBuf {
        self.base_dir.join("appliances.csv")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), EnergyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EnergyError::Io(format!("Failed to create base directory: {}", e)))
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, EnergyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                EnergyError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("energy-tracker"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, EnergyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| EnergyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("energy-tracker"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.default_data_file(),
            temp_dir.path().join("appliances.csv")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(HOME_ENV_VAR, custom_path);
        let paths = TrackerPaths::new().unwrap();
        env::remove_var(HOME_ENV_VAR);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("tracker");
        let paths = TrackerPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
