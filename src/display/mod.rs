//! Display formatting for terminal output
//!
//! Provides utilities for formatting data models for terminal display.

pub mod appliance;

pub use appliance::{format_appliance_choices, format_appliance_list};
