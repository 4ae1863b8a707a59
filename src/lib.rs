//! Energy Tracker - household appliance energy usage and cost
//!
//! This library keeps a list of appliances (name, watts, hours per day),
//! persists it as CSV, and derives daily/monthly kWh and cost at a given
//! price per kWh.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Appliance record and electricity rate
//! - `storage`: In-memory appliance store and CSV persistence
//! - `calculator`: Energy and cost formulas
//! - `reports`: Usage and cost report
//! - `display`: Terminal formatting
//! - `shell`: Interactive menu loop
//! - `cli`: One-shot command handlers
//!
//! # Example
//!
//! ```rust
//! use energy_tracker::calculator;
//! use energy_tracker::models::Rate;
//! use energy_tracker::storage::ApplianceStore;
//!
//! let mut store = ApplianceStore::new();
//! store.add("Bulb", 100.0, 10.0).unwrap();
//!
//! let bulb = &store.list()[0];
//! let rate = Rate::new(0.2).unwrap();
//! assert_eq!(calculator::monthly_kwh(bulb), 30.0);
//! assert!((calculator::monthly_cost(bulb, rate) - 6.0).abs() < 1e-9);
//! ```

pub mod calculator;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod shell;
pub mod storage;

pub use error::{EnergyError, EnergyResult};
