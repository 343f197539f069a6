/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Unit lookup and conversion

use super::dimension::{Dimension, Signature};
use super::errors::{Result, UnitError};
use super::parser::parse_unit;
use super::tables;

/// A resolved unit: its factor relative to the base unit and its signature
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub name: String,
    pub factor: f64,
    pub signature: Signature,
}

impl Unit {
    /// The named dimension of this unit, if it has one
    pub fn dimension(&self) -> Option<Dimension> {
        Dimension::from_signature(self.signature)
    }
}

/// Canonicalise Unicode spellings of unit symbols
///
/// Both the Latin letter `Å` (U+00C5) and the Angstrom sign (U+212B), as
/// well as `A` followed by a combining ring, become `Angstrom`. Micro signs
/// become `u`, and `·`/`×` become `*`.
pub fn normalize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.trim().chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\u{00c5}' | '\u{212b}' => out.push_str("Angstrom"),
            'A' if chars.peek() == Some(&'\u{030a}') => {
                chars.next();
                out.push_str("Angstrom");
            }
            '\u{00b5}' | '\u{03bc}' => out.push('u'),
            '\u{00b7}' | '\u{00d7}' | '\u{22c5}' => out.push('*'),
            '\u{2212}' => out.push('-'),
            _ => out.push(c),
        }
    }
    out
}

/// Resolve a unit name, simple or composite
pub fn lookup(unit_name: &str) -> Result<Unit> {
    if let Some((dimension, factor)) = tables::find_named(unit_name) {
        return Ok(Unit {
            name: unit_name.to_string(),
            factor,
            signature: dimension.signature(),
        });
    }

    let normalized = normalize(unit_name);
    if let Some((dimension, factor)) = tables::find_named(&normalized) {
        log::trace!("'{}' normalized to '{}'", unit_name, normalized);
        return Ok(Unit {
            name: unit_name.to_string(),
            factor,
            signature: dimension.signature(),
        });
    }

    let composite = parse_unit(&normalized).map_err(|err| {
        log::debug!("cannot parse unit '{}': {}", unit_name, err);
        UnitError::UnknownUnit(unit_name.to_string())
    })?;

    let mut factor = 1.0;
    let mut signature = Signature::DIMENSIONLESS;
    for (terms, sign) in [(&composite.numerator, 1i8), (&composite.denominator, -1i8)] {
        for term in terms {
            let (f, s) = tables::find_symbol(&term.symbol)
                .ok_or_else(|| UnitError::UnknownUnit(term.symbol.clone()))?;
            let power = i8::try_from(term.power)
                .ok()
                .and_then(|p| p.checked_mul(sign))
                .ok_or_else(|| exponent_overflow(unit_name, &term.symbol))?;
            factor *= f.powi(i32::from(power));
            signature = s
                .checked_mul(power)
                .and_then(|scaled| signature.checked_add(scaled))
                .ok_or_else(|| exponent_overflow(unit_name, &term.symbol))?;
        }
    }
    if !factor.is_finite() || factor == 0.0 {
        log::debug!("factor of '{}' is out of range: {:e}", unit_name, factor);
        return Err(UnitError::UnknownUnit(unit_name.to_string()));
    }

    log::debug!(
        "resolved composite unit '{}' ({}) to factor {:e}",
        unit_name,
        composite,
        factor
    );
    Ok(Unit {
        name: unit_name.to_string(),
        factor,
        signature,
    })
}

fn exponent_overflow(unit_name: &str, symbol: &str) -> UnitError {
    let err = UnitError::ParseError(format!("exponent of '{}' is out of range", symbol));
    log::debug!("cannot resolve unit '{}': {}", unit_name, err);
    UnitError::UnknownUnit(unit_name.to_string())
}

/// The dimension a unit belongs to
pub fn unit_type(unit_name: &str) -> Result<Dimension> {
    let unit = lookup(unit_name)?;
    unit.dimension()
        .ok_or_else(|| UnitError::UnknownUnit(unit_name.to_string()))
}

/// Factor of a unit relative to the base unit of `dimension`
pub fn factor(unit_name: &str, dimension: Dimension) -> Result<f64> {
    let unit = lookup(unit_name)?;
    if unit.signature != dimension.signature() {
        return Err(UnitError::IncompatibleDimension {
            from: unit_name.to_string(),
            to: dimension.base_unit().to_string(),
        });
    }
    Ok(unit.factor)
}

/// Factor `f` with `value_to = value_from * f` for two units of `dimension`
pub fn get_conversion_factor(dimension: Dimension, unit_from: &str, unit_to: &str) -> Result<f64> {
    Ok(factor(unit_from, dimension)? / factor(unit_to, dimension)?)
}

/// Convert `value` from `unit_from` to `unit_to`
///
/// Both units must measure the same quantity. Unknown names yield
/// [`UnitError::UnknownUnit`], mismatched quantities yield
/// [`UnitError::IncompatibleDimension`].
pub fn convert(value: f64, unit_from: &str, unit_to: &str) -> Result<f64> {
    let from = lookup(unit_from)?;
    let to = lookup(unit_to)?;
    if from.signature != to.signature {
        log::debug!(
            "refusing to convert '{}' {:?} to '{}' {:?}",
            unit_from,
            from.signature,
            unit_to,
            to.signature
        );
        return Err(UnitError::IncompatibleDimension {
            from: unit_from.to_string(),
            to: unit_to.to_string(),
        });
    }

    let result = value * from.factor / to.factor;
    log::trace!("{} {} = {} {}", value, unit_from, result, unit_to);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_angstrom_spellings() {
        assert_eq!(normalize("\u{00c5}"), "Angstrom");
        assert_eq!(normalize("\u{212b}"), "Angstrom");
        assert_eq!(normalize("A\u{030a}"), "Angstrom");
        assert_eq!(normalize(" kJ/(mol\u{00b7}\u{00c5}) "), "kJ/(mol*Angstrom)");
        assert_eq!(normalize("\u{00b5}s"), "us");
    }

    #[test]
    fn test_lookup_simple_and_composite() {
        let simple = lookup("nm").unwrap();
        assert_eq!(simple.factor, 10.0);
        assert_eq!(simple.dimension(), Some(Dimension::Length));

        let composite = lookup("kcal/(mol*nm)").unwrap();
        assert_relative_eq!(composite.factor, 0.4184, max_relative = 1e-12);
        assert_eq!(composite.dimension(), Some(Dimension::Force));
    }

    #[test]
    fn test_unknown_token_is_named() {
        assert_eq!(
            lookup("kJ/(mol*furlong)"),
            Err(UnitError::UnknownUnit("furlong".to_string()))
        );
        assert_eq!(
            lookup("kJ/(mol"),
            Err(UnitError::UnknownUnit("kJ/(mol".to_string()))
        );
    }

    #[test]
    fn test_factor_checks_dimension() {
        assert_eq!(factor("fs", Dimension::Time).unwrap(), 1e-3);
        assert!(matches!(
            factor("fs", Dimension::Length),
            Err(UnitError::IncompatibleDimension { .. })
        ));
    }

    #[test]
    fn test_identity_conversion() {
        assert_eq!(convert(3.5, "ps", "ps").unwrap(), 3.5);
    }
}
