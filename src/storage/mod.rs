//! Storage layer for the energy tracker
//!
//! Provides the in-memory appliance store and CSV file storage with atomic
//! writes and automatic directory creation.

pub mod appliances;
pub mod file_io;

pub use appliances::{ApplianceStore, ApplianceUpdate, CSV_HEADER};
pub use file_io::{open_csv, write_csv_atomic};
