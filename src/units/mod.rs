/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Unit conversion for molecular-dynamics quantities
//!
//! Every supported quantity has one base unit:
//!
//! | dimension | base unit            |
//! |-----------|----------------------|
//! | length    | `Angstrom`           |
//! | time      | `ps`                 |
//! | energy    | `kJ/mol`             |
//! | force     | `kJ/(mol*Angstrom)`  |
//! | charge    | `e`                  |
//! | speed     | `Angstrom/ps`        |
//!
//! A unit's factor is the number of base units in one of that unit, so a
//! conversion is `value * factor(from) / factor(to)`. Names missing from the
//! tables are parsed as composite expressions (`kcal/(mol*nm)`) and resolved
//! token by token.
//!
//! ```
//! use mdunits::units;
//!
//! let angstrom = units::convert(12.34567, "nm", "A").unwrap();
//! assert!((angstrom - 123.4567).abs() < 1e-9);
//! ```

pub mod constants;
pub mod conversions;
pub mod dimension;
pub mod errors;
pub mod parser;
pub mod tables;

pub use constants::{constant, constants};
pub use conversions::{convert, factor, get_conversion_factor, lookup, normalize, unit_type, Unit};
pub use dimension::{Dimension, Signature};
pub use errors::{Result, UnitError};
pub use parser::{parse_unit, CompositeUnit, UnitTerm};
pub use tables::{
    charge_unit_factor, energy_unit_factor, force_unit_factor, length_unit_factor,
    speed_unit_factor, time_unit_factor, unit_factor,
};
