//! Appliance CLI commands
//!
//! One-shot commands that load the data file, run a single store or report
//! operation, and save again when something changed.

use std::path::PathBuf;

use clap::Subcommand;
use tracing::debug;

use crate::display::format_appliance_list;
use crate::error::{EnergyError, EnergyResult};
use crate::models::Rate;
use crate::reports::{ApplianceUsage, UsageReport};
use crate::storage::{ApplianceStore, ApplianceUpdate};

/// Appliance subcommands
#[derive(Subcommand, Debug)]
pub enum ApplianceCommands {
    /// List all appliances
    #[command(alias = "ls")]
    List,
    /// Add an appliance
    Add {
        /// Appliance name
        name: String,
        /// Power draw in watts
        watts: f64,
        /// Hours used per day (0-24)
        hours: f64,
    },
    /// Change an appliance's watts or hours per day
    Edit {
        /// Appliance name or list number
        appliance: String,
        /// New power draw in watts
        #[arg(short, long)]
        watts: Option<f64>,
        /// New hours per day
        #[arg(short = 'H', long)]
        hours: Option<f64>,
    },
    /// Rename an appliance
    Rename {
        /// Appliance name or list number
        appliance: String,
        /// New name
        name: String,
    },
    /// Delete an appliance
    #[command(alias = "rm")]
    Delete {
        /// Appliance name or list number
        appliance: String,
    },
    /// Show usage and cost of one appliance
    Show {
        /// Appliance name or list number
        appliance: String,
    },
    /// Show usage and cost of all appliances
    Compute,
}

/// Resolved inputs shared by every appliance command
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Appliance CSV to read and write
    pub data_file: PathBuf,
    /// Price per kWh, if one was configured
    pub rate: Option<Rate>,
    /// Currency symbol for cost output
    pub currency: String,
}

impl CommandContext {
    fn require_rate(&self) -> EnergyResult<Rate> {
        self.rate.ok_or_else(|| {
            EnergyError::Validation(
                "No rate given; pass --rate or run 'energy config set-rate <RATE>'".into(),
            )
        })
    }
}

/// Handle an appliance command
pub fn handle_appliance_command(ctx: &CommandContext, cmd: ApplianceCommands) -> EnergyResult<()> {
    let mut store = ApplianceStore::new();
    store.load(&ctx.data_file)?;
    debug!(command = ?cmd, file = %ctx.data_file.display(), "running command");

    match cmd {
        ApplianceCommands::List => {
            print!("{}", format_appliance_list(store.list()));
        }

        ApplianceCommands::Add { name, watts, hours } => {
            let index = store.add(&name, watts, hours)?;
            store.save(&ctx.data_file)?;
            println!("Added {}", store.list()[index]);
        }

        ApplianceCommands::Edit {
            appliance,
            watts,
            hours,
        } => {
            let update = ApplianceUpdate {
                watts,
                hours_per_day: hours,
            };
            if update.is_empty() {
                return Err(EnergyError::Validation(
                    "Nothing to change; pass --watts and/or --hours".into(),
                ));
            }

            let updated = store.edit(&appliance, update)?.clone();
            store.save(&ctx.data_file)?;
            println!("Updated {}", updated);
        }

        ApplianceCommands::Rename { appliance, name } => {
            let old_name = store.get(&appliance)?.name.clone();
            let renamed = store.rename(&appliance, &name)?.name.clone();
            store.save(&ctx.data_file)?;
            println!("Renamed '{}' to '{}'", old_name, renamed);
        }

        ApplianceCommands::Delete { appliance } => {
            let removed = store.delete(&appliance)?;
            store.save(&ctx.data_file)?;
            println!("Deleted '{}'", removed.name);
        }

        ApplianceCommands::Show { appliance } => {
            let rate = ctx.require_rate()?;
            let usage = ApplianceUsage::for_appliance(store.get(&appliance)?, rate);
            print!("{}", usage.format_details(&ctx.currency));
        }

        ApplianceCommands::Compute => {
            let rate = ctx.require_rate()?;
            let report = UsageReport::generate(store.list(), rate);
            print!("{}", report.format_terminal(&ctx.currency));
        }
    }

    Ok(())
}
