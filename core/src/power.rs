//! # Fast Power
//!
//! Computes `x^n` for a real base and a signed integer exponent in
//! `O(log n)` squarings.

use tracing::trace;

/// Raises `base` to `exponent`.
///
/// * `base == 1` or `exponent == 0` yields `1`, including `0^0`.
/// * A negative exponent inverts the base first. A zero base with a negative
///   exponent therefore yields `inf` (or `NaN`) under IEEE-754 rules; this is
///   not treated as an error.
///
/// Each iteration squares the base and halves the exponent when the exponent
/// is even, then folds one factor of the base into the result.
pub fn power(base: f64, exponent: i64) -> f64 {
    if base == 1.0 || exponent == 0 {
        return 1.0;
    }

    let mut x: f64 = if exponent < 0 { 1.0 / base } else { base };
    let mut remaining: u64 = exponent.unsigned_abs();
    let mut result: f64 = 1.0;

    trace!("power: base={x}, exponent={remaining}");

    while remaining > 0 {
        if remaining % 2 == 0 {
            x *= x;
            remaining /= 2;
        }
        result *= x;
        remaining -= 1;
    }

    result
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
