//! Core data models for the energy tracker
//!
//! This module contains the appliance record and the electricity rate, plus
//! the parse-then-validate helpers that turn raw text into typed values.

pub mod appliance;
pub mod rate;

pub use appliance::{Appliance, ApplianceValidationError};
pub use rate::Rate;
