/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical dimensions and their base units

use super::errors::UnitError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

/// Exponents of the primitive quantities a unit is built from
///
/// The order is length, time, energy, charge. Amount of substance is not a
/// primitive: a mole counts `N_Avogadro` particles and energies are stored
/// per particle, which is why `kJ/mol` ends up with a pure energy signature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature(pub [i8; 4]);

impl Signature {
    pub const DIMENSIONLESS: Signature = Signature([0, 0, 0, 0]);
    pub const LENGTH: Signature = Signature([1, 0, 0, 0]);
    pub const TIME: Signature = Signature([0, 1, 0, 0]);
    pub const ENERGY: Signature = Signature([0, 0, 1, 0]);
    pub const CHARGE: Signature = Signature([0, 0, 0, 1]);
    pub const FORCE: Signature = Signature([-1, 0, 1, 0]);
    pub const SPEED: Signature = Signature([1, -1, 0, 0]);

    /// Sum of exponents, or `None` if any exponent leaves the `i8` range
    pub fn checked_add(self, rhs: Signature) -> Option<Signature> {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o = o.checked_add(r)?;
        }
        Some(Signature(out))
    }

    /// Exponents scaled by `power`, or `None` on overflow
    pub fn checked_mul(self, power: i8) -> Option<Signature> {
        let mut out = self.0;
        for o in out.iter_mut() {
            *o = o.checked_mul(power)?;
        }
        Some(Signature(out))
    }
}

impl Add for Signature {
    type Output = Signature;

    fn add(self, rhs: Signature) -> Signature {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(rhs.0) {
            *o += r;
        }
        Signature(out)
    }
}

impl Neg for Signature {
    type Output = Signature;

    fn neg(self) -> Signature {
        Signature(self.0.map(|e| -e))
    }
}

impl Sub for Signature {
    type Output = Signature;

    fn sub(self, rhs: Signature) -> Signature {
        self + (-rhs)
    }
}

impl Mul<i8> for Signature {
    type Output = Signature;

    fn mul(self, rhs: i8) -> Signature {
        Signature(self.0.map(|e| e * rhs))
    }
}

/// A named category of physical quantity with a single base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Time,
    Energy,
    Force,
    Charge,
    Speed,
}

impl Dimension {
    /// Every dimension with a conversion table
    pub const ALL: [Dimension; 6] = [
        Dimension::Length,
        Dimension::Time,
        Dimension::Energy,
        Dimension::Force,
        Dimension::Charge,
        Dimension::Speed,
    ];

    /// The unit whose factor is exactly 1.0
    pub fn base_unit(self) -> &'static str {
        match self {
            Dimension::Length => "Angstrom",
            Dimension::Time => "ps",
            Dimension::Energy => "kJ/mol",
            Dimension::Force => "kJ/(mol*Angstrom)",
            Dimension::Charge => "e",
            Dimension::Speed => "Angstrom/ps",
        }
    }

    pub fn signature(self) -> Signature {
        match self {
            Dimension::Length => Signature::LENGTH,
            Dimension::Time => Signature::TIME,
            Dimension::Energy => Signature::ENERGY,
            Dimension::Force => Signature::FORCE,
            Dimension::Charge => Signature::CHARGE,
            Dimension::Speed => Signature::SPEED,
        }
    }

    /// The dimension with the given signature, if it has a table
    pub fn from_signature(signature: Signature) -> Option<Dimension> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.signature() == signature)
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Time => "time",
            Dimension::Energy => "energy",
            Dimension::Force => "force",
            Dimension::Charge => "charge",
            Dimension::Speed => "speed",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dimension {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnitError::ParseError(format!("unknown dimension '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_arithmetic() {
        assert_eq!(Signature::ENERGY - Signature::LENGTH, Signature::FORCE);
        assert_eq!(Signature::LENGTH - Signature::TIME, Signature::SPEED);
        assert_eq!(Signature::LENGTH * 3, Signature([3, 0, 0, 0]));
        assert_eq!(-Signature::TIME, Signature([0, -1, 0, 0]));
    }

    #[test]
    fn test_checked_signature_arithmetic() {
        let big = Signature::LENGTH * 100;
        assert_eq!(big.checked_add(big), None);
        assert_eq!(Signature::LENGTH.checked_mul(-128), Some(Signature([-128, 0, 0, 0])));
        assert_eq!(Signature::FORCE.checked_mul(-128), None);
        assert_eq!(
            Signature::ENERGY.checked_add(-Signature::LENGTH),
            Some(Signature::FORCE)
        );
    }

    #[test]
    fn test_signature_round_trip() {
        for dimension in Dimension::ALL {
            assert_eq!(Dimension::from_signature(dimension.signature()), Some(dimension));
        }
        assert_eq!(Dimension::from_signature(Signature::DIMENSIONLESS), None);
    }

    #[test]
    fn test_dimension_from_str() {
        assert_eq!("Force".parse::<Dimension>().unwrap(), Dimension::Force);
        assert_eq!(" length ".parse::<Dimension>().unwrap(), Dimension::Length);
        assert!("density".parse::<Dimension>().is_err());
    }
}
