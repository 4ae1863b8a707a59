//! Appliance store with CSV persistence
//!
//! Holds the ordered, in-memory list of appliances for a session and
//! mediates every mutation. Loading and saving go through `appliances.csv`
//! style files with a `name,watts,hours_per_day` header.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{EnergyError, EnergyResult};
use crate::models::appliance::{self, Appliance};

use super::file_io::{open_csv, write_csv_atomic};

/// Header row of the appliance CSV, in column order
pub const CSV_HEADER: [&str; 3] = ["name", "watts", "hours_per_day"];

/// Fields to change on an existing appliance
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApplianceUpdate {
    /// New power draw in watts
    pub watts: Option<f64>,
    /// New daily usage in hours
    pub hours_per_day: Option<f64>,
}

impl ApplianceUpdate {
    /// Check if the update changes nothing
    pub fn is_empty(&self) -> bool {
        self.watts.is_none() && self.hours_per_day.is_none()
    }
}

/// In-memory ordered collection of appliances
#[derive(Debug, Clone, Default)]
pub struct ApplianceStore {
    appliances: Vec<Appliance>,
}

impl ApplianceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new appliance, returning its zero-based index
    pub fn add(&mut self, name: &str, watts: f64, hours_per_day: f64) -> EnergyResult<usize> {
        let appliance = Appliance::new(name.trim(), watts, hours_per_day);
        appliance.validate()?;

        if self.position_of(&appliance.name).is_some() {
            return Err(EnergyError::Validation(format!(
                "An appliance named '{}' already exists",
                appliance.name
            )));
        }

        debug!(name = %appliance.name, watts, hours_per_day, "adding appliance");
        self.appliances.push(appliance);
        Ok(self.appliances.len() - 1)
    }

    /// Find an appliance by name, or by its 1-based position in the list
    pub fn find(&self, identifier: &str) -> Option<usize> {
        if let Some(index) = self.position_of(identifier) {
            return Some(index);
        }

        identifier
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|position| position.checked_sub(1))
            .filter(|&index| index < self.appliances.len())
    }

    /// Check if an appliance with this name exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }

    /// Get an appliance by name or 1-based position
    pub fn get(&self, identifier: &str) -> EnergyResult<&Appliance> {
        let index = self.resolve(identifier)?;
        Ok(&self.appliances[index])
    }

    /// Update the supplied fields of an appliance
    ///
    /// Nothing changes unless every supplied value is valid.
    pub fn edit(&mut self, identifier: &str, update: ApplianceUpdate) -> EnergyResult<&Appliance> {
        let index = self.resolve(identifier)?;

        if let Some(watts) = update.watts {
            appliance::validate_watts(watts)?;
        }
        if let Some(hours) = update.hours_per_day {
            appliance::validate_hours(hours)?;
        }

        let target = &mut self.appliances[index];
        if let Some(watts) = update.watts {
            target.watts = watts;
        }
        if let Some(hours) = update.hours_per_day {
            target.hours_per_day = hours;
        }

        debug!(name = %target.name, watts = target.watts, hours_per_day = target.hours_per_day, "edited appliance");
        Ok(target)
    }

    /// Rename an appliance, keeping names unique
    pub fn rename(&mut self, identifier: &str, new_name: &str) -> EnergyResult<&Appliance> {
        let index = self.resolve(identifier)?;
        let new_name = new_name.trim();
        appliance::validate_name(new_name)?;

        if let Some(existing) = self.position_of(new_name) {
            if existing != index {
                return Err(EnergyError::Validation(format!(
                    "An appliance named '{}' already exists",
                    new_name
                )));
            }
        }

        let target = &mut self.appliances[index];
        debug!(from = %target.name, to = %new_name, "renamed appliance");
        target.name = new_name.to_string();
        Ok(target)
    }

    /// Remove an appliance, keeping the order of the rest
    pub fn delete(&mut self, identifier: &str) -> EnergyResult<Appliance> {
        let index = self.resolve(identifier)?;
        let removed = self.appliances.remove(index);
        debug!(name = %removed.name, "deleted appliance");
        Ok(removed)
    }

    /// All appliances in insertion order
    pub fn list(&self) -> &[Appliance] {
        &self.appliances
    }

    /// Number of appliances
    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }

    /// Replace the contents of the store with the appliances in a CSV file
    ///
    /// A missing file gives an empty store. Any malformed row fails the whole
    /// load and leaves the store as it was. Returns the number of appliances
    /// loaded.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> EnergyResult<usize> {
        let path = path.as_ref();
        let loaded = read_appliances(path)?;
        info!(path = %path.display(), count = loaded.len(), "loaded appliances");
        self.appliances = loaded;
        Ok(self.appliances.len())
    }

    /// Write the store to a CSV file, replacing it atomically
    pub fn save<P: AsRef<Path>>(&self, path: P) -> EnergyResult<()> {
        let path = path.as_ref();
        write_csv_atomic(path, &CSV_HEADER, &self.appliances)?;
        info!(path = %path.display(), count = self.appliances.len(), "saved appliances");
        Ok(())
    }

    fn resolve(&self, identifier: &str) -> EnergyResult<usize> {
        self.find(identifier)
            .ok_or_else(|| EnergyError::appliance_not_found(identifier.trim()))
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.appliances.iter().position(|a| a.matches_name(name))
    }
}

/// Read and validate every appliance in a CSV file
fn read_appliances(path: &Path) -> EnergyResult<Vec<Appliance>> {
    let Some(mut reader) = open_csv(path)? else {
        debug!(path = %path.display(), "no data file, starting empty");
        return Ok(Vec::new());
    };

    let mut appliances: Vec<Appliance> = Vec::new();
    let mut seen_header = false;

    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            if e.is_io_error() {
                EnergyError::from(e)
            } else {
                let line = e.position().map(|p| p.line()).unwrap_or(index as u64 + 1);
                EnergyError::format(line, e.to_string())
            }
        })?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        if !seen_header {
            if record.iter().ne(CSV_HEADER.iter().copied()) {
                return Err(EnergyError::format(
                    line,
                    format!("expected header '{}'", CSV_HEADER.join(",")),
                ));
            }
            seen_header = true;
            continue;
        }

        if record.len() != CSV_HEADER.len() {
            return Err(EnergyError::format(
                line,
                format!("expected 3 fields, found {}", record.len()),
            ));
        }

        let name = &record[0];
        appliance::validate_name(name).map_err(|e| EnergyError::format(line, e.to_string()))?;
        let watts = appliance::parse_watts(&record[1])
            .map_err(|e| EnergyError::format(line, format!("watts: {}", e)))?;
        let hours_per_day = appliance::parse_hours(&record[2])
            .map_err(|e| EnergyError::format(line, format!("hours_per_day: {}", e)))?;

        if appliances.iter().any(|a| a.matches_name(name)) {
            return Err(EnergyError::format(
                line,
                format!("duplicate appliance name '{}'", name),
            ));
        }

        appliances.push(Appliance::new(name, watts, hours_per_day));
    }

    Ok(appliances)
}
