//! Menu actions
//!
//! Parses one line of menu input into a typed action.

use std::path::PathBuf;

use crate::error::{EnergyError, EnergyResult};
use crate::models::Rate;

/// A top-level shell action
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add,
    Edit,
    Rename,
    Delete,
    List,
    Show,
    /// Usage report, optionally at a one-off rate
    Compute(Option<Rate>),
    /// Set the session rate
    SetRate(Rate),
    /// Save, optionally to a different file
    Save(Option<PathBuf>),
    /// Load, optionally from a different file
    Load(Option<PathBuf>),
    Help,
    Quit,
}

impl Action {
    /// Parse a menu line such as `add`, `compute 0.25` or `save backup.csv`
    pub fn parse(line: &str) -> EnergyResult<Self> {
        let line = line.trim();
        let (command, argument) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, Some(rest.trim()).filter(|r| !r.is_empty())),
            None => (line, None),
        };

        let action = match command.to_lowercase().as_str() {
            "add" | "a" => Self::Add,
            "edit" | "e" => Self::Edit,
            "rename" => Self::Rename,
            "delete" | "del" | "rm" => Self::Delete,
            "list" | "ls" | "l" => Self::List,
            "show" => Self::Show,
            "compute" | "c" => Self::Compute(argument.map(str::parse::<Rate>).transpose()?),
            "rate" => match argument {
                Some(value) => Self::SetRate(value.parse()?),
                None => {
                    return Err(EnergyError::Validation(
                        "Usage: rate <price per kWh>".into(),
                    ))
                }
            },
            "save" | "s" => Self::Save(argument.map(PathBuf::from)),
            "load" => Self::Load(argument.map(PathBuf::from)),
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            other => {
                return Err(EnergyError::Validation(format!(
                    "Unknown action '{}'. Type 'help' to see the menu",
                    other
                )))
            }
        };

        Ok(action)
    }
}

/// Menu text listing every action
pub const MENU: &str = "\
===== ENERGY TRACKER =====
  add              Add an appliance
  edit             Change an appliance's watts or hours per day
  rename           Rename an appliance
  delete           Delete an appliance
  list             View all appliances
  show             Usage and cost of one appliance
  compute [rate]   Usage and cost of all appliances
  rate <rate>      Set the price per kWh for this session
  save [path]      Save appliances to CSV
  load [path]      Load appliances from CSV
  help             Show this menu
  quit             Save and exit";
