/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Conversion factor tables
//!
//! Each factor answers "how many base units equal one of this unit". The base
//! units are Angstrom, ps, kJ/mol, kJ/(mol*Angstrom), e and Angstrom/ps.

use super::constants::{CALORIE, ELEMENTARY_CHARGE, N_AVOGADRO};
use super::dimension::{Dimension, Signature};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// 1 AKMA time unit in ps
pub const AKMA_TIME: f64 = 4.888821e-2;

/// Amber charge units per elementary charge
pub const AMBER_CHARGE: f64 = 18.2223;

/// One mole expressed as a particle count
const MOL: f64 = N_AVOGADRO;
/// One Joule per particle in kJ/mol
const JOULE: f64 = N_AVOGADRO / 1000.0;
/// One metre in Angstrom
const METER: f64 = 1e10;

const LENGTH: &[(&str, f64)] = &[
    ("Angstrom", 1.0),
    ("A", 1.0),
    ("\u{00c5}", 1.0),
    ("\u{212b}", 1.0),
    ("nm", 10.0),
    ("nanometer", 10.0),
    ("pm", 1e-2),
    ("picometer", 1e-2),
    ("fm", 1e-5),
    ("femtometer", 1e-5),
    ("m", METER),
    ("meter", METER),
];

const TIME: &[(&str, f64)] = &[
    ("ps", 1.0),
    ("picosecond", 1.0),
    ("fs", 1e-3),
    ("femtosecond", 1e-3),
    ("ns", 1e3),
    ("nanosecond", 1e3),
    ("us", 1e6),
    ("microsecond", 1e6),
    ("ms", 1e9),
    ("millisecond", 1e9),
    ("s", 1e12),
    ("sec", 1e12),
    ("second", 1e12),
    ("AKMA", AKMA_TIME),
];

const ENERGY: &[(&str, f64)] = &[
    ("kJ/mol", 1.0),
    ("kcal/mol", CALORIE),
    ("J", JOULE),
    ("eV", JOULE * ELEMENTARY_CHARGE),
];

const FORCE: &[(&str, f64)] = &[
    ("kJ/(mol*Angstrom)", 1.0),
    ("kJ/(mol*A)", 1.0),
    ("kJ/(mol*nm)", 0.1),
    ("kcal/(mol*Angstrom)", CALORIE),
    ("Newton", JOULE / METER),
    ("N", JOULE / METER),
    ("J/m", JOULE / METER),
];

const CHARGE: &[(&str, f64)] = &[
    ("e", 1.0),
    ("Amber", 1.0 / AMBER_CHARGE),
    ("C", 1.0 / ELEMENTARY_CHARGE),
    ("As", 1.0 / ELEMENTARY_CHARGE),
];

const SPEED: &[(&str, f64)] = &[
    ("Angstrom/ps", 1.0),
    ("A/ps", 1.0),
    ("\u{00c5}/ps", 1.0),
    ("nm/ps", 10.0),
    ("pm/ps", 1e-2),
    ("m/s", METER / 1e12),
    ("Angstrom/fs", 1e3),
    ("A/fs", 1e3),
    ("Angstrom/AKMA", 1.0 / AKMA_TIME),
    ("A/AKMA", 1.0 / AKMA_TIME),
];

/// Symbols that may appear as tokens inside composite expressions
const SYMBOLS: &[(&str, f64, Signature)] = &[
    ("mol", MOL, Signature::DIMENSIONLESS),
    ("J", JOULE, Signature::ENERGY),
    ("kJ", JOULE * 1e3, Signature::ENERGY),
    ("cal", JOULE * CALORIE, Signature::ENERGY),
    ("kcal", JOULE * CALORIE * 1e3, Signature::ENERGY),
    ("eV", JOULE * ELEMENTARY_CHARGE, Signature::ENERGY),
];

type Table = HashMap<&'static str, f64>;

fn build(entries: &[(&'static str, f64)]) -> Table {
    entries.iter().copied().collect()
}

static LENGTH_UNIT_FACTOR: Lazy<Table> = Lazy::new(|| build(LENGTH));
static TIME_UNIT_FACTOR: Lazy<Table> = Lazy::new(|| build(TIME));
static ENERGY_UNIT_FACTOR: Lazy<Table> = Lazy::new(|| build(ENERGY));
static FORCE_UNIT_FACTOR: Lazy<Table> = Lazy::new(|| build(FORCE));
static CHARGE_UNIT_FACTOR: Lazy<Table> = Lazy::new(|| build(CHARGE));
static SPEED_UNIT_FACTOR: Lazy<Table> = Lazy::new(|| build(SPEED));

static SYMBOL_TABLE: Lazy<HashMap<&'static str, (f64, Signature)>> = Lazy::new(|| {
    let mut table = HashMap::new();
    // Single-word names from the dimension tables double as symbols
    for dimension in [Dimension::Length, Dimension::Time, Dimension::Charge, Dimension::Force] {
        for (&name, &factor) in unit_factor(dimension) {
            if !name.contains(['/', '*', '(']) {
                table.insert(name, (factor, dimension.signature()));
            }
        }
    }
    for &(name, factor, signature) in SYMBOLS {
        table.insert(name, (factor, signature));
    }
    table
});

/// Conversion table for one dimension
pub fn unit_factor(dimension: Dimension) -> &'static Table {
    match dimension {
        Dimension::Length => &LENGTH_UNIT_FACTOR,
        Dimension::Time => &TIME_UNIT_FACTOR,
        Dimension::Energy => &ENERGY_UNIT_FACTOR,
        Dimension::Force => &FORCE_UNIT_FACTOR,
        Dimension::Charge => &CHARGE_UNIT_FACTOR,
        Dimension::Speed => &SPEED_UNIT_FACTOR,
    }
}

/// Length factors relative to Angstrom
///
/// ```
/// use mdunits::units::length_unit_factor;
///
/// assert_eq!(length_unit_factor()["nm"], 10.0);
/// assert_eq!(length_unit_factor()["\u{212b}"], 1.0);
/// ```
pub fn length_unit_factor() -> &'static Table {
    &LENGTH_UNIT_FACTOR
}

/// Time factors relative to ps
pub fn time_unit_factor() -> &'static Table {
    &TIME_UNIT_FACTOR
}

/// Energy factors relative to kJ/mol
pub fn energy_unit_factor() -> &'static Table {
    &ENERGY_UNIT_FACTOR
}

/// Force factors relative to kJ/(mol*Angstrom)
pub fn force_unit_factor() -> &'static Table {
    &FORCE_UNIT_FACTOR
}

/// Charge factors relative to the elementary charge
pub fn charge_unit_factor() -> &'static Table {
    &CHARGE_UNIT_FACTOR
}

/// Speed factors relative to Angstrom/ps
pub fn speed_unit_factor() -> &'static Table {
    &SPEED_UNIT_FACTOR
}

/// Find a unit name in the dimension tables
pub(crate) fn find_named(name: &str) -> Option<(Dimension, f64)> {
    Dimension::ALL
        .into_iter()
        .find_map(|d| unit_factor(d).get(name).map(|&f| (d, f)))
}

/// Find a single token of a composite expression
pub(crate) fn find_symbol(symbol: &str) -> Option<(f64, Signature)> {
    SYMBOL_TABLE.get(symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base_units_are_exactly_one() {
        for dimension in Dimension::ALL {
            assert_eq!(unit_factor(dimension)[dimension.base_unit()], 1.0);
        }
    }

    #[test]
    fn test_names_unique_across_tables() {
        let mut seen = HashSet::new();
        for dimension in Dimension::ALL {
            for name in unit_factor(dimension).keys() {
                assert!(seen.insert(*name), "{} appears in more than one table", name);
            }
        }
    }

    #[test]
    fn test_symbol_table_includes_lengths() {
        assert_eq!(find_symbol("nm"), Some((10.0, Signature::LENGTH)));
        assert_eq!(find_symbol("mol").map(|s| s.1), Some(Signature::DIMENSIONLESS));
        assert!(find_symbol("kJ/mol").is_none());
    }
}
