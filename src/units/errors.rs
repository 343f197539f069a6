/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the units module

use thiserror::Error;

/// Errors that can occur while resolving or converting units
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// A unit name (or a token inside a composite unit) has no table entry
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Both units are known but measure different quantities
    #[error("Incompatible units: cannot convert {from} to {to}")]
    IncompatibleDimension { from: String, to: String },

    /// A composite unit expression is malformed
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type for unit operations
pub type Result<T> = std::result::Result<T, UnitError>;
