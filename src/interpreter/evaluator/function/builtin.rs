//! Math primitives whose behavior differs from the plain `f64` methods.
//!
//! Everything else in the function table maps straight onto `f64`.

/// Rounds to the nearest integer, sending half-way cases toward positive
/// infinity.
///
/// `f64::round` rounds half-way cases away from zero, which turns `-2.5` into
/// `-3`; calculator users expect `-2`.
///
/// # Example
/// ```
/// use pcalc::interpreter::evaluator::function::builtin::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// ```
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Raises `base` to `exponent`.
///
/// Same as [`f64::powf`] except that a NaN exponent always yields NaN, and so
/// does `(±1) ^ ±∞`.
///
/// # Example
/// ```
/// use pcalc::interpreter::evaluator::function::builtin::pow;
///
/// assert_eq!(pow(2.0, 10.0), 1024.0);
/// assert!(pow(1.0, f64::NAN).is_nan());
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn pow(base: f64, exponent: f64) -> f64 {
    if exponent.is_nan() || (base.abs() == 1.0 && exponent.is_infinite()) {
        return f64::NAN;
    }
    base.powf(exponent)
}

/// Draws a uniformly distributed value in `[0, 1)` from the thread-local
/// generator.
#[must_use]
pub fn random() -> f64 {
    rand::random::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up_matches_calculator_convention() {
        assert_eq!(round_half_up(0.5), 1.0);
        assert_eq!(round_half_up(1.4), 1.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(-1.5), -1.0);
        assert_eq!(round_half_up(-1.6), -2.0);
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
        assert_eq!(round_half_up(f64::INFINITY), f64::INFINITY);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn pow_propagates_nan_exponents() {
        assert!(pow(1.0, f64::NAN).is_nan());
        assert!(pow(-1.0, f64::INFINITY).is_nan());
        assert!(pow(1.0, f64::NEG_INFINITY).is_nan());
        assert_eq!(pow(f64::NAN, 0.0), 1.0);
        assert_eq!(pow(2.0, -1.0), 0.5);
        assert!(pow(-8.0, 1.0 / 3.0).is_nan());
    }

    #[test]
    fn random_stays_in_unit_interval() {
        for _ in 0..1000 {
            let r = random();
            assert!((0.0..1.0).contains(&r), "{r} out of range");
        }
    }
}
