//! Angle unit conversions.
//!
//! Three units are in play: radians (canonical), degrees, and "percent", which
//! is a fraction of a full turn (`0..1` maps to `0..2π`). Every result is passed
//! through [`round_off`].

use std::f64::consts::{PI, TAU};

use crate::precision::round_off;

#[inline]
pub fn degree_to_radian(degree: f64) -> f64 {
    round_off(degree / 180.0 * PI)
}

#[inline]
pub fn radian_to_degree(radian: f64) -> f64 {
    round_off(radian * 180.0 / PI)
}

/// Turns to radians.
#[inline]
pub fn percent_to_radian(percent: f64) -> f64 {
    round_off(percent * TAU)
}

/// Radians to turns.
#[inline]
pub fn radian_to_percent(radian: f64) -> f64 {
    round_off(radian / TAU)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::ROUND_OFF_STEP;

    #[test]
    fn right_angle() {
        assert_eq!(degree_to_radian(90.0), round_off(PI / 2.0));
        assert_eq!(radian_to_degree(PI / 2.0), 90.0);
    }

    #[test]
    fn half_turn() {
        assert_eq!(percent_to_radian(0.5), round_off(PI));
        assert_eq!(radian_to_percent(PI), 0.5);
    }

    #[test]
    fn negative_angles() {
        assert_eq!(radian_to_degree(-PI), -180.0);
        assert_eq!(radian_to_percent(-PI / 2.0), -0.25);
    }

    #[test]
    fn degree_round_trip_on_whole_degrees() {
        // The radian is stored to 1e-7, so the degree error is scaled by 180/π.
        let tolerance = ROUND_OFF_STEP * 180.0 / PI;
        for d in 0..360 {
            let d = d as f64;
            assert!((radian_to_degree(degree_to_radian(d)) - d).abs() <= tolerance, "degree {d}");
        }
    }

    #[test]
    fn percent_round_trip_on_hundredths() {
        for p in 0..100 {
            let p = p as f64 / 100.0;
            assert!((radian_to_percent(percent_to_radian(p)) - p).abs() <= ROUND_OFF_STEP, "percent {p}");
        }
    }

    #[test]
    fn nan_propagates() {
        assert!(degree_to_radian(f64::NAN).is_nan());
        assert!(radian_to_percent(f64::NAN).is_nan());
    }
}
