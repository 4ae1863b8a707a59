//! CLI command handlers
//!
//! This module contains the implementation of one-shot CLI commands,
//! bridging the clap argument parsing with the store and reports.

pub mod appliance;
pub mod config;

pub use appliance::{handle_appliance_command, ApplianceCommands, CommandContext};
pub use config::{handle_config_command, ConfigCommands};
