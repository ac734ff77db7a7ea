//! Fixed-precision rounding.
//!
//! Every stored `Coordinate` field and every angle conversion goes through
//! [`round_off`], so that reading a trig-derived view and writing it back does
//! not register as a change.

/// Multiplier used by [`round_off`]: values are kept to 7 decimal digits.
pub const ROUND_OFF_SCALE: f64 = 10_000_000.0;

/// Smallest distinguishable step after rounding (`1 / ROUND_OFF_SCALE`).
pub const ROUND_OFF_STEP: f64 = 1.0 / ROUND_OFF_SCALE;

/// Rounds `value` to the nearest multiple of [`ROUND_OFF_STEP`].
///
/// Halfway cases round towards positive infinity. NaN and infinities pass
/// through unchanged.
#[inline]
pub fn round_off(value: f64) -> f64 {
    (value * ROUND_OFF_SCALE + 0.5).floor() / ROUND_OFF_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_digits_past_seventh() {
        assert_eq!(round_off(1.000_000_04), 1.0);
        assert_eq!(round_off(1.000_000_06), 1.000_000_1);
    }

    #[test]
    fn negative_values_round_to_nearest() {
        assert_eq!(round_off(-1.000_000_04), -1.0);
        assert_eq!(round_off(-1.000_000_06), -1.000_000_1);
    }

    #[test]
    fn integers_unchanged() {
        assert_eq!(round_off(42.0), 42.0);
        assert_eq!(round_off(-7.0), -7.0);
        assert_eq!(round_off(0.0), 0.0);
    }

    #[test]
    fn trig_noise_is_absorbed() {
        // cos(pi/2) is ~6.1e-17, not zero.
        assert_eq!(round_off(std::f64::consts::FRAC_PI_2.cos()), 0.0);
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_off(f64::NAN).is_nan());
        assert_eq!(round_off(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_off(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
