/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # mdunits
//!
//! Unit conversion and physical constants for molecular-dynamics analysis.
//!
//! Lengths, times, energies, forces, charges and speeds are converted through
//! fixed factor tables relative to one base unit per dimension. Composite
//! names such as `kJ/(mol*nm)` are parsed and resolved token by token.
//! Constants follow CODATA 2010.

pub mod cli;
pub mod config;
pub mod units;

pub use config::Flags;
pub use units::{convert, UnitError};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
