use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, error, warn};

use energy_tracker::cli::{
    handle_appliance_command, handle_config_command, ApplianceCommands, CommandContext,
    ConfigCommands,
};
use energy_tracker::config::paths::{TrackerPaths, HOME_ENV_VAR};
use energy_tracker::config::settings::Settings;
use energy_tracker::logging::init_cli_logger;
use energy_tracker::models::Rate;
use energy_tracker::shell::{Shell, ShellOptions};
use energy_tracker::storage::ApplianceStore;

#[derive(Parser)]
#[command(
    name = "energy",
    version,
    about = "Track household appliance energy usage and cost",
    long_about = "Energy Tracker keeps a list of your appliances with their power draw \
                  and daily usage, and estimates daily and monthly kWh and cost at \
                  your electricity rate. Run without a command for the interactive menu."
)]
struct Cli {
    /// Appliance CSV file (defaults to the configured file)
    #[arg(short, long, global = true, env = "ENERGY_TRACKER_FILE")]
    file: Option<PathBuf>,

    /// Price per kWh (defaults to the configured rate)
    #[arg(short, long, global = true, env = "ENERGY_TRACKER_RATE")]
    rate: Option<Rate>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu
    Shell,

    #[command(flatten)]
    Appliance(ApplianceCommands),

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    // An explicit data file is enough to work without a config directory
    let paths = match TrackerPaths::new() {
        Ok(paths) => Some(paths),
        Err(e) if cli.file.is_some() => {
            warn!(error = %e, "no config directory, using default settings");
            None
        }
        Err(e) => return Err(e.into()),
    };

    let mut settings = match &paths {
        Some(paths) => Settings::load_or_create(paths)?,
        None => Settings::default(),
    };
    let data_file = match &paths {
        Some(paths) => settings.resolve_data_file(paths, cli.file.clone()),
        None => cli.file.clone().unwrap_or_default(),
    };
    let rate = cli.rate.or_else(|| settings.rate());
    debug!(file = %data_file.display(), ?rate, "resolved configuration");

    match cli.command {
        None | Some(Commands::Shell) => run_shell(&settings, data_file, rate)?,
        Some(Commands::Appliance(cmd)) => {
            let ctx = CommandContext {
                data_file,
                rate,
                currency: settings.currency_symbol.clone(),
            };
            handle_appliance_command(&ctx, cmd)?;
        }
        Some(Commands::Config { command }) => {
            let paths = paths.context(format!(
                "No config directory; set {} or HOME",
                HOME_ENV_VAR
            ))?;
            let cmd = command.unwrap_or(ConfigCommands::Show);
            handle_config_command(&paths, &mut settings, &data_file, cmd)?;
        }
    }

    Ok(())
}

fn run_shell(settings: &Settings, data_file: PathBuf, rate: Option<Rate>) -> Result<()> {
    // A corrupt data file stops the session before anything can overwrite it
    let mut store = ApplianceStore::new();
    if let Err(e) = store.load(&data_file) {
        error!(error = %e, file = %data_file.display(), "could not load data file");
        return Err(e).with_context(|| format!("Failed to load {}", data_file.display()));
    }

    let options = ShellOptions {
        data_file,
        rate,
        currency: settings.currency_symbol.clone(),
        save_on_exit: settings.save_on_exit,
    };

    let stdin = io::stdin();
    let mut shell = Shell::new(store, options, stdin.lock(), io::stdout());
    shell.run()?;
    Ok(())
}
