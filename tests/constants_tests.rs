/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

use approx::assert_relative_eq;
use mdunits::units::constants;
use rstest::rstest;

// CODATA 2010 (NIST), http://physics.nist.gov/cuu/Constants/
#[rstest]
#[case("N_Avogadro", 6.02214129e+23)]
#[case("elementary_charge", 1.602176565e-19)]
#[case("calorie", 4.184)]
fn test_constant(#[case] name: &str, #[case] reference: f64) {
    let value = constants()
        .get(name)
        .copied()
        .unwrap_or_else(|| panic!("missing constant {}", name));
    assert_relative_eq!(value, reference, max_relative = 1e-6);
}

#[test]
fn test_constants_are_positive() {
    for (name, value) in constants() {
        assert!(*value > 0.0, "{} should be positive", name);
    }
}
