use core::ops::{Add, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};

use super::Xy;

/// Free 2D vector (offset between two positions) in logical pixels.
///
/// Arithmetic is unchecked: scaling by zero, NaN or infinity simply
/// propagates into the components.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Distance {
    pub x: f64,
    pub y: f64,
}

impl Distance {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Multiplies both components by `factor` in place.
    #[inline]
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.x *= factor;
        self.y *= factor;
        self
    }

    /// Scales proportionally so that `x` becomes `target`.
    ///
    /// When `x` is zero the factor is infinite (or NaN) and so are the results.
    #[inline]
    pub fn scale_to_x(&mut self, target: f64) -> &mut Self {
        self.scale(target / self.x)
    }

    /// Scales proportionally so that `y` becomes `target`.
    #[inline]
    pub fn scale_to_y(&mut self, target: f64) -> &mut Self {
        self.scale(target / self.y)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Xy for Distance {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl Add for Distance {
    type Output = Distance;
    #[inline]
    fn add(self, rhs: Distance) -> Distance {
        Distance::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Distance {
    type Output = Distance;
    #[inline]
    fn sub(self, rhs: Distance) -> Distance {
        Distance::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Distance {
    type Output = Distance;
    #[inline]
    fn mul(self, rhs: f64) -> Distance {
        Distance::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Distance {
    type Output = Distance;
    #[inline]
    fn neg(self) -> Distance {
        Distance::new(-self.x, -self.y)
    }
}

impl From<Distance> for [f64; 2] {
    #[inline]
    fn from(d: Distance) -> Self {
        bytemuck::cast(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_euclidean() {
        assert_eq!(Distance::new(3.0, 4.0).length(), 5.0);
        assert_eq!(Distance::new(-3.0, -4.0).length(), 5.0);
        assert_eq!(Distance::zero().length(), 0.0);
    }

    #[test]
    fn scale_in_place_and_chain() {
        let mut d = Distance::new(2.0, -3.0);
        d.scale(2.0).scale(0.5).scale(3.0);
        assert_eq!(d, Distance::new(6.0, -9.0));
    }

    #[test]
    fn scale_to_x_keeps_ratio() {
        let mut d = Distance::new(4.0, 2.0);
        d.scale_to_x(10.0);
        assert_eq!(d, Distance::new(10.0, 5.0));
    }

    #[test]
    fn scale_to_y_keeps_ratio() {
        let mut d = Distance::new(4.0, 2.0);
        d.scale_to_y(-1.0);
        assert_eq!(d, Distance::new(-2.0, -1.0));
    }

    #[test]
    fn scale_to_x_on_zero_component_propagates() {
        let mut d = Distance::new(0.0, 2.0);
        d.scale_to_x(5.0);
        // 0 * inf is NaN, 2 * inf is inf.
        assert!(d.x.is_nan());
        assert_eq!(d.y, f64::INFINITY);
        assert!(!d.is_finite());
    }

    #[test]
    fn copy_is_independent() {
        let a = Distance::new(1.0, 1.0);
        let mut b = a;
        b.scale(4.0);
        assert_eq!(a, Distance::new(1.0, 1.0));
        assert_eq!(b, Distance::new(4.0, 4.0));
    }

    #[test]
    fn into_array_is_x_then_y() {
        let a: [f64; 2] = Distance::new(-3.0, 8.5).into();
        assert_eq!(a, [-3.0, 8.5]);
    }

    #[test]
    fn operators() {
        let a = Distance::new(1.0, 2.0);
        let b = Distance::new(3.0, 5.0);
        assert_eq!(a + b, Distance::new(4.0, 7.0));
        assert_eq!(b - a, Distance::new(2.0, 3.0));
        assert_eq!(a * 3.0, Distance::new(3.0, 6.0));
        assert_eq!(-a, Distance::new(-1.0, -2.0));
    }
}
