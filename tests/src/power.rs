#![cfg(test)]
use labkit_core::power::power;
use proptest::prelude::*;

#[test]
fn power_reference_values() {
    assert_eq!(power(2.0, 10), 1024.0);
    assert_eq!(power(2.0, -2), 0.25);
    assert_eq!(power(0.5, 3), 0.125);
}

proptest! {
    /// `b^n * b^-n` lands on one for every non-zero base.
    #[test]
    fn power_and_inverse_cancel(base in 0.25f64..4.0, exponent in -40i64..=40) {
        let product = power(base, exponent) * power(base, -exponent);
        prop_assert!((product - 1.0).abs() < 1e-9, "{base}^{exponent}: product {product}");
    }

    #[test]
    fn power_zero_exponent_is_one(base in proptest::num::f64::ANY) {
        prop_assert_eq!(power(base, 0), 1.0);
    }

    #[test]
    fn power_base_one_is_one(exponent in any::<i64>()) {
        prop_assert_eq!(power(1.0, exponent), 1.0);
    }
}
