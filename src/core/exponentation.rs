//! Exponentation operator fixtures.
//!
//! Each fixture exercises the operator in a different syntactic
//! position: a constant expression, two variable operands, and a call
//! through a nested function. The functions are pure and total over
//! `f64`; non-finite operands propagate per IEEE-754, nothing panics.

/// Constant operands: `2 ** -6`.
///
/// Exact over binary floating point, so this returns precisely
/// `0.015625`.
pub fn test_exponentation_constant() -> f64 {
    2f64.powi(-6)
}

/// Variable operands: `x ** y`.
///
/// No validation. NaN or infinite operands follow the usual `pow`
/// rules rather than failing.
pub fn test_exponentation_variables(x: f64, y: f64) -> f64 {
    x.powf(y)
}

/// The operator inside a nested function call.
///
/// Defines `w(i) = i ** 1` and immediately applies it to `two`.
/// Identity for every `f64` value, including `-0.0`; NaN maps to NaN.
pub fn test_exponentation_within_function(two: f64) -> f64 {
    fn w(i: f64) -> f64 {
        i.powf(1.0)
    }
    w(two)
}

/// Driver: runs all three fixtures with the canonical operands and
/// discards the results.
pub fn run_exponentation_tests() {
    let (x, y) = (2.0, 3.0);
    test_exponentation_constant();
    test_exponentation_variables(x, y);
    test_exponentation_within_function(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_is_exact() {
        assert_eq!(test_exponentation_constant(), 0.015625);
    }

    #[test]
    fn test_variables_integer_operands() {
        assert_eq!(test_exponentation_variables(2.0, 3.0), 8.0);
        assert_eq!(test_exponentation_variables(10.0, 0.0), 1.0);
        assert_eq!(test_exponentation_variables(2.0, -6.0), 0.015625);
    }

    #[test]
    fn test_variables_fractional_exponent() {
        assert_eq!(test_exponentation_variables(4.0, 0.5), 2.0);
        assert_eq!(test_exponentation_variables(9.0, 0.5), 3.0);
    }

    #[test]
    fn test_variables_non_numeric_operands_yield_nan() {
        assert!(test_exponentation_variables(f64::NAN, 2.0).is_nan());
        assert!(test_exponentation_variables(-8.0, 0.5).is_nan());
    }

    #[test]
    fn test_variables_infinite_operands() {
        assert_eq!(test_exponentation_variables(2.0, f64::INFINITY), f64::INFINITY);
        assert_eq!(test_exponentation_variables(2.0, f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_within_function_is_identity() {
        for v in [2.0, -3.5, 0.015625, 1e300, f64::MIN_POSITIVE] {
            assert_eq!(test_exponentation_within_function(v), v);
        }
    }

    #[test]
    fn test_within_function_preserves_negative_zero() {
        let out = test_exponentation_within_function(-0.0);
        assert_eq!(out.to_bits(), (-0.0f64).to_bits());
    }

    #[test]
    fn test_within_function_nan_in_nan_out() {
        assert!(test_exponentation_within_function(f64::NAN).is_nan());
    }

    #[test]
    fn test_driver_completes() {
        run_exponentation_tests();
    }
}
