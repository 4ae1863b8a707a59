//! Reports module for the energy tracker
//!
//! Provides the usage and cost report over the appliance list.

pub mod usage;

pub use usage::{ApplianceUsage, UsageReport};
