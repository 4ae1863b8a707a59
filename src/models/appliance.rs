//! Appliance model
//!
//! An appliance is a tracked device with a name, a power draw in watts, and
//! how many hours per day it runs. Raw text from the user or from a data file
//! goes through `parse_watts` / `parse_hours` before it becomes a record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest day an appliance can run
pub const MAX_HOURS_PER_DAY: f64 = 24.0;

/// A tracked household appliance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    /// Display name, unique within a store (case-insensitive)
    pub name: String,

    /// Power draw in watts
    pub watts: f64,

    /// Usage in hours per day
    pub hours_per_day: f64,
}

impl Appliance {
    /// Create a new appliance without validating it
    pub fn new(name: impl Into<String>, watts: f64, hours_per_day: f64) -> Self {
        Self {
            name: name.into(),
            watts,
            hours_per_day,
        }
    }

    /// Validate the appliance
    pub fn validate(&self) -> Result<(), ApplianceValidationError> {
        validate_name(&self.name)?;
        validate_watts(self.watts)?;
        validate_hours(self.hours_per_day)?;
        Ok(())
    }

    /// Normalize a name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this appliance matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}W | {}h/day",
            self.name, self.watts, self.hours_per_day
        )
    }
}

/// Check that a name is usable
pub fn validate_name(name: &str) -> Result<(), ApplianceValidationError> {
    if name.trim().is_empty() {
        return Err(ApplianceValidationError::EmptyName);
    }
    Ok(())
}

/// Check that a power draw is strictly positive
pub fn validate_watts(watts: f64) -> Result<(), ApplianceValidationError> {
    if !watts.is_finite() || watts <= 0.0 {
        return Err(ApplianceValidationError::NonPositiveWatts(watts));
    }
    Ok(())
}

/// Check that daily hours fall in [0, 24]
pub fn validate_hours(hours: f64) -> Result<(), ApplianceValidationError> {
    if !hours.is_finite() || !(0.0..=MAX_HOURS_PER_DAY).contains(&hours) {
        return Err(ApplianceValidationError::HoursOutOfRange(hours));
    }
    Ok(())
}

/// Parse and validate a raw watts value
pub fn parse_watts(raw: &str) -> Result<f64, ApplianceValidationError> {
    let watts = parse_number(raw)?;
    validate_watts(watts)?;
    Ok(watts)
}

/// Parse and validate a raw hours-per-day value
pub fn parse_hours(raw: &str) -> Result<f64, ApplianceValidationError> {
    let hours = parse_number(raw)?;
    validate_hours(hours)?;
    Ok(hours)
}

/// Parse a plain decimal number
pub fn parse_number(raw: &str) -> Result<f64, ApplianceValidationError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ApplianceValidationError::NotANumber(trimmed.to_string())),
    }
}

/// Validation errors for appliances
#[derive(Debug, Clone, PartialEq)]
pub enum ApplianceValidationError {
    EmptyName,
    NonPositiveWatts(f64),
    HoursOutOfRange(f64),
    NotANumber(String),
}

impl fmt::Display for ApplianceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Appliance name cannot be empty"),
            Self::NonPositiveWatts(w) => {
                write!(f, "Watts must be a positive number (got {})", w)
            }
            Self::HoursOutOfRange(h) => {
                write!(f, "Hours per day must be between 0 and 24 (got {})", h)
            }
            Self::NotANumber(s) => write!(f, "'{}' is not a valid number", s),
        }
    }
}

impl std::error::Error for ApplianceValidationError {}

impl From<ApplianceValidationError> for crate::error::EnergyError {
    fn from(err: ApplianceValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_appliance() {
        let lamp = Appliance::new("Lamp", 60.0, 5.0);
        assert_eq!(lamp.name, "Lamp");
        assert_eq!(lamp.watts, 60.0);
        assert_eq!(lamp.hours_per_day, 5.0);
        assert!(lamp.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Appliance::new("  ", 60.0, 5.0).validate(),
            Err(ApplianceValidationError::EmptyName)
        );
        assert!(matches!(
            Appliance::new("Lamp", 0.0, 5.0).validate(),
            Err(ApplianceValidationError::NonPositiveWatts(_))
        ));
        assert!(matches!(
            Appliance::new("Lamp", 60.0, 24.5).validate(),
            Err(ApplianceValidationError::HoursOutOfRange(_))
        ));
        assert!(Appliance::new("Lamp", 60.0, 0.0).validate().is_ok());
        assert!(Appliance::new("Lamp", 60.0, 24.0).validate().is_ok());
    }

    #[test]
    fn test_parse_watts() {
        assert_eq!(parse_watts(" 1500 "), Ok(1500.0));
        assert_eq!(parse_watts("7.5"), Ok(7.5));
        assert!(matches!(
            parse_watts("abc"),
            Err(ApplianceValidationError::NotANumber(_))
        ));
        assert!(matches!(
            parse_watts("-5"),
            Err(ApplianceValidationError::NonPositiveWatts(_))
        ));
        assert!(matches!(
            parse_watts("inf"),
            Err(ApplianceValidationError::NotANumber(_))
        ));
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("0"), Ok(0.0));
        assert_eq!(parse_hours("24"), Ok(24.0));
        assert!(matches!(
            parse_hours("25"),
            Err(ApplianceValidationError::HoursOutOfRange(_))
        ));
        assert!(matches!(
            parse_hours("NaN"),
            Err(ApplianceValidationError::NotANumber(_))
        ));
    }

    #[test]
    fn test_matches_name_case_insensitive() {
        let tv = Appliance::new("Living Room TV", 120.0, 4.0);
        assert!(tv.matches_name("living room tv"));
        assert!(tv.matches_name("  LIVING ROOM TV "));
        assert!(!tv.matches_name("TV"));
    }

    #[test]
    fn test_display() {
        let lamp = Appliance::new("Lamp", 60.0, 5.5);
        assert_eq!(lamp.to_string(), "Lamp | 60W | 5.5h/day");
    }
}
