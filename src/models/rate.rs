//! Electricity rate
//!
//! Price per kWh supplied by the user. A `Rate` can only be built from a
//! finite, non-negative value.

use std::fmt;
use std::str::FromStr;

use crate::error::EnergyError;

/// Price per kilowatt-hour
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rate(f64);

impl Rate {
    /// Create a rate, rejecting negative or non-finite prices
    pub fn new(price_per_kwh: f64) -> Result<Self, EnergyError> {
        if !price_per_kwh.is_finite() || price_per_kwh < 0.0 {
            return Err(EnergyError::Validation(format!(
                "Rate must be a non-negative number (got {})",
                price_per_kwh
            )));
        }
        Ok(Self(price_per_kwh))
    }

    /// The price per kWh
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl FromStr for Rate {
    type Err = EnergyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed.parse().map_err(|_| {
            EnergyError::Validation(format!("'{}' is not a valid rate", trimmed))
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/kWh", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_rates() {
        assert_eq!(Rate::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Rate::new(0.2).unwrap().value(), 0.2);
    }

    #[test]
    fn test_negative_rate_rejected() {
        let err = Rate::new(-0.1).unwrap_err();
        assert!(err.is_validation());
        assert!(Rate::new(f64::NAN).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("0.5".parse::<Rate>().unwrap().value(), 0.5);
        assert!("cheap".parse::<Rate>().unwrap_err().is_validation());
        assert!("-1".parse::<Rate>().unwrap_err().is_validation());
    }
}
