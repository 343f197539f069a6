/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical constants (CODATA 2010)
//!
//! Values are taken from the CODATA 2010 recommended set published by NIST.
//! Names in the lookup table follow the spelling used by trajectory tooling,
//! e.g. `N_Avogadro` and `elementary_charge`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Avogadro constant in mol^-1
pub const N_AVOGADRO: f64 = 6.02214129e+23;

/// Elementary charge in A s
pub const ELEMENTARY_CHARGE: f64 = 1.602176565e-19;

/// Thermochemical calorie in J
pub const CALORIE: f64 = 4.184;

/// Molar gas constant in kJ/(mol K)
pub const BOLTZMAN_CONSTANT: f64 = 8.314462159e-3;

/// Vacuum permittivity in e^2/((kJ/mol) Angstrom)
pub const ELECTRIC_CONSTANT: f64 = 5.526350e-3;

static CONSTANTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("N_Avogadro", N_AVOGADRO),
        ("elementary_charge", ELEMENTARY_CHARGE),
        ("calorie", CALORIE),
        ("Boltzman_constant", BOLTZMAN_CONSTANT),
        ("electric_constant", ELECTRIC_CONSTANT),
    ])
});

/// All named physical constants
pub fn constants() -> &'static HashMap<&'static str, f64> {
    &CONSTANTS
}

/// Look up a single constant by name
pub fn constant(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_named_lookup_matches_consts() {
        assert_relative_eq!(constant("N_Avogadro").unwrap(), N_AVOGADRO);
        assert_relative_eq!(constant("calorie").unwrap(), CALORIE);
        assert!(constant("Planck").is_none());
    }

    #[test]
    fn test_faraday_from_constants() {
        // F = N_A * e, in C/mol
        let faraday = N_AVOGADRO * ELEMENTARY_CHARGE;
        assert_relative_eq!(faraday, 96485.3365, max_relative = 1e-8);
    }
}
