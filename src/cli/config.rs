//! Config CLI commands
//!
//! Shows resolved paths and settings, and persists the default rate and
//! data file.

use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::{Settings, TrackerPaths};
use crate::error::EnergyResult;
use crate::models::Rate;

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,
    /// Set the default price per kWh
    SetRate {
        /// Price per kWh
        price: Rate,
    },
    /// Set the default appliance CSV file
    SetFile {
        /// Path to the CSV file
        path: PathBuf,
    },
}

/// Handle a config command
pub fn handle_config_command(
    paths: &TrackerPaths,
    settings: &mut Settings,
    data_file: &Path,
    cmd: ConfigCommands,
) -> EnergyResult<()> {
    match cmd {
        ConfigCommands::Show => {
            print!("{}", format_config(paths, settings, data_file));
        }

        ConfigCommands::SetRate { price } => {
            settings.default_rate = Some(price.value());
            settings.save(paths)?;
            println!("Default rate set to {}{}", settings.currency_symbol, price);
        }

        ConfigCommands::SetFile { path } => {
            settings.data_file = Some(path.clone());
            settings.save(paths)?;
            println!("Default data file set to {}", path.display());
        }
    }

    Ok(())
}

/// Format the resolved configuration
pub fn format_config(paths: &TrackerPaths, settings: &Settings, data_file: &Path) -> String {
    let rate = settings
        .default_rate
        .map(|r| format!("{}{}/kWh", settings.currency_symbol, r))
        .unwrap_or_else(|| "(not set)".to_string());

    let mut output = String::new();
    output.push_str("Energy Tracker Configuration\n");
    output.push_str("============================\n");
    output.push_str(&format!("Config directory: {}\n", paths.base_dir().display()));
    output.push_str(&format!("Settings file:    {}\n", paths.settings_file().display()));
    output.push_str(&format!("Data file:        {}\n", data_file.display()));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Default rate:   {}\n", rate));
    output.push_str(&format!("  Currency:       {}\n", settings.currency_symbol));
    output.push_str(&format!("  Save on exit:   {}\n", settings.save_on_exit));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_rate_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        let data_file = paths.default_data_file();

        handle_config_command(
            &paths,
            &mut settings,
            &data_file,
            ConfigCommands::SetRate {
                price: Rate::new(0.31).unwrap(),
            },
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_rate, Some(0.31));
    }

    #[test]
    fn test_set_file_persists() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut settings = Settings::default();
        let data_file = paths.default_data_file();

        handle_config_command(
            &paths,
            &mut settings,
            &data_file,
            ConfigCommands::SetFile {
                path: PathBuf::from("/srv/home/appliances.csv"),
            },
        )
        .unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(
            loaded.data_file,
            Some(PathBuf::from("/srv/home/appliances.csv"))
        );
    }

    #[test]
    fn test_set_file_save_failure_is_returned() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let paths = TrackerPaths::with_base_dir(blocker.join("tracker"));
        let mut settings = Settings::default();
        let data_file = paths.default_data_file();

        let result = handle_config_command(
            &paths,
            &mut settings,
            &data_file,
            ConfigCommands::SetFile {
                path: PathBuf::from("/srv/home/appliances.csv"),
            },
        );

        assert!(result.is_err());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_format_config() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::default();

        let output = format_config(&paths, &settings, &paths.default_data_file());
        assert!(output.contains("Default rate:   (not set)"));
        assert!(output.contains("appliances.csv"));
    }
}
