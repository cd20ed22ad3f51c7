//! Adapter implementations
//!
//! Adapters translate between the in-memory store and concrete external
//! representations. The only one today is the CSV data file.

pub mod csv_file;

pub use csv_file::{LoadReport, SaveReport};
