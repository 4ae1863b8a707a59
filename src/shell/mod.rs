//! Interactive menu shell
//!
//! Runs the add/edit/delete/list/compute/save/load loop over an
//! `ApplianceStore` owned by the session. Every error from a single action
//! is reported and the loop carries on; only a failed save on quit ends the
//! session with an error.

pub mod action;
pub mod console;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::display::{format_appliance_choices, format_appliance_list};
use crate::error::{EnergyError, EnergyResult};
use crate::models::appliance::{parse_hours, parse_watts, validate_name};
use crate::models::Rate;
use crate::reports::{ApplianceUsage, UsageReport};
use crate::storage::{ApplianceStore, ApplianceUpdate};

pub use action::{Action, MENU};
pub use console::Console;

/// Session options for the shell
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// File used by `save`/`load` without a path, and on quit
    pub data_file: PathBuf,
    /// Price per kWh, prompted for when unset
    pub rate: Option<Rate>,
    /// Currency symbol for cost output
    pub currency: String,
    /// Whether quitting writes the store to `data_file`
    pub save_on_exit: bool,
}

/// The interactive shell state
pub struct Shell<R, W> {
    store: ApplianceStore,
    options: ShellOptions,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over an already-loaded store
    pub fn new(store: ApplianceStore, options: ShellOptions, input: R, output: W) -> Self {
        Self {
            store,
            options,
            console: Console::new(input, output),
        }
    }

    /// The session's store
    pub fn store(&self) -> &ApplianceStore {
        &self.store
    }

    /// The file the session currently saves to
    pub fn data_file(&self) -> &PathBuf {
        &self.options.data_file
    }

    /// Consume the shell, returning the output sink
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run until `quit` or end of input
    pub fn run(&mut self) -> EnergyResult<()> {
        self.console.say(MENU)?;

        loop {
            let Some(line) = self.console.read_line("\nChoose an action: ")? else {
                return self.quit();
            };
            if line.is_empty() {
                continue;
            }

            let action = match Action::parse(&line) {
                Ok(action) => action,
                Err(e) => {
                    self.report(&e)?;
                    continue;
                }
            };

            if action == Action::Quit {
                return self.quit();
            }

            if let Err(e) = self.dispatch(action) {
                self.report(&e)?;
            }
        }
    }

    fn dispatch(&mut self, action: Action) -> EnergyResult<()> {
        match action {
            Action::Add => self.add(),
            Action::Edit => self.edit(),
            Action::Rename => self.rename(),
            Action::Delete => self.delete(),
            Action::List => self.console.say(format_appliance_list(self.store.list())),
            Action::Show => self.show(),
            Action::Compute(rate) => self.compute(rate),
            Action::SetRate(rate) => {
                self.options.rate = Some(rate);
                self.console.say(format!("Rate set to {}{}", self.options.currency, rate))
            }
            Action::Save(path) => self.save(path),
            Action::Load(path) => self.load(path),
            Action::Help => self.console.say(MENU),
            Action::Quit => Ok(()),
        }
    }

    fn report(&mut self, err: &EnergyError) -> EnergyResult<()> {
        debug!(error = %err, "action failed");
        self.console.say(format!("Error: {}", err))
    }

    fn add(&mut self) -> EnergyResult<()> {
        let Some(name) = self.console.read_line("Appliance name: ")? else {
            return Ok(());
        };
        validate_name(&name)?;
        if self.store.contains(&name) {
            return Err(EnergyError::Validation(format!(
                "An appliance named '{}' already exists",
                name
            )));
        }

        let Some(watts) = self.console.ask("Power (watts): ", parse_watts)? else {
            return Ok(());
        };
        let Some(hours) = self.console.ask("Hours used per day (0-24): ", parse_hours)? else {
            return Ok(());
        };

        let index = self.store.add(&name, watts, hours)?;
        let added = &self.store.list()[index];
        self.console.say(format!("Added {}", added))
    }

    fn edit(&mut self) -> EnergyResult<()> {
        let Some(identifier) = self.select("Appliance to edit (name or number): ")? else {
            return Ok(());
        };
        let current = self.store.get(&identifier)?.clone();

        let Some(watts) = self.console.ask_optional(
            &format!("New watts (blank keeps {}): ", current.watts),
            parse_watts,
        )?
        else {
            return Ok(());
        };
        let Some(hours_per_day) = self.console.ask_optional(
            &format!("New hours per day (blank keeps {}): ", current.hours_per_day),
            parse_hours,
        )?
        else {
            return Ok(());
        };

        let update = ApplianceUpdate {
            watts,
            hours_per_day,
        };
        if update.is_empty() {
            return self.console.say("Nothing changed.");
        }

        let updated = self.store.edit(&identifier, update)?.clone();
        self.console.say(format!("Updated {}", updated))
    }

    fn rename(&mut self) -> EnergyResult<()> {
        let Some(identifier) = self.select("Appliance to rename (name or number): ")? else {
            return Ok(());
        };
        let old_name = self.store.get(&identifier)?.name.clone();

        let Some(new_name) = self
            .console
            .read_line(&format!("New name (current: {}): ", old_name))?
        else {
            return Ok(());
        };

        let renamed = self.store.rename(&identifier, &new_name)?.name.clone();
        self.console.say(format!("Renamed '{}' to '{}'", old_name, renamed))
    }

    fn delete(&mut self) -> EnergyResult<()> {
        let Some(identifier) = self.select("Appliance to delete (name or number): ")? else {
            return Ok(());
        };
        let name = self.store.get(&identifier)?.name.clone();

        if !self
            .console
            .confirm(&format!("Delete '{}'? (y/n): ", name))?
        {
            return self.console.say("Deletion cancelled.");
        }

        let removed = self.store.delete(&identifier)?;
        self.console.say(format!("Deleted '{}'", removed.name))
    }

    fn show(&mut self) -> EnergyResult<()> {
        let Some(identifier) = self.select("Appliance (name or number): ")? else {
            return Ok(());
        };
        let appliance = self.store.get(&identifier)?.clone();

        let Some(rate) = self.session_rate()? else {
            return Ok(());
        };

        let usage = ApplianceUsage::for_appliance(&appliance, rate);
        let details = usage.format_details(&self.options.currency);
        self.console.say(details)
    }

    fn compute(&mut self, rate: Option<Rate>) -> EnergyResult<()> {
        if self.store.is_empty() {
            return self.console.say("No appliances added yet.");
        }

        let rate = match rate {
            Some(rate) => rate,
            None => match self.session_rate()? {
                Some(rate) => rate,
                None => return Ok(()),
            },
        };

        let report = UsageReport::generate(self.store.list(), rate);
        let text = report.format_terminal(&self.options.currency);
        self.console.print(text)
    }

    fn save(&mut self, path: Option<PathBuf>) -> EnergyResult<()> {
        let path = path.unwrap_or_else(|| self.options.data_file.clone());
        self.store.save(&path)?;
        self.console.say(format!(
            "Saved {} appliances to {}",
            self.store.len(),
            path.display()
        ))?;
        self.options.data_file = path;
        Ok(())
    }

    fn load(&mut self, path: Option<PathBuf>) -> EnergyResult<()> {
        let path = path.unwrap_or_else(|| self.options.data_file.clone());
        let count = self.store.load(&path)?;
        self.console
            .say(format!("Loaded {} appliances from {}", count, path.display()))?;
        self.options.data_file = path;
        Ok(())
    }

    fn quit(&mut self) -> EnergyResult<()> {
        if self.options.save_on_exit {
            let path = self.options.data_file.clone();
            if let Err(e) = self.store.save(&path) {
                warn!(error = %e, file = %path.display(), "could not save on exit");
                self.report(&e)?;
                return Err(e);
            }
            self.console
                .say(format!("Data saved to {}.", path.display()))?;
        }

        info!("shell session ended");
        self.console.say("Goodbye!")
    }

    /// List the appliances and read an identifier, `None` if there is nothing to pick
    fn select(&mut self, prompt: &str) -> EnergyResult<Option<String>> {
        if self.store.is_empty() {
            self.console.say("No appliances added yet.")?;
            return Ok(None);
        }

        self.console.print(format_appliance_choices(self.store.list()))?;
        self.console.read_line(prompt)
    }

    fn session_rate(&mut self) -> EnergyResult<Option<Rate>> {
        if let Some(rate) = self.options.rate {
            return Ok(Some(rate));
        }

        let rate = self
            .console
            .ask("Enter price per kWh (e.g. 0.5): ", str::parse::<Rate>)?;
        self.options.rate = rate;
        Ok(rate)
    }
}
