use bytemuck::{Pod, Zeroable};

use super::{Distance, Xy};

/// Absolute 2D position in logical pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Offset from `other` to `self` (`self - other`).
    #[inline]
    pub fn distance_to(&self, other: &impl Xy) -> Distance {
        Distance::new(self.x - other.x(), self.y - other.y())
    }

    /// Moves the point by `by` in place.
    #[inline]
    pub fn displace(&mut self, by: &impl Xy) -> &mut Self {
        self.x += by.x();
        self.y += by.y();
        self
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Interleaved `[x0, y0, x1, y1, ..]` view of `points`, as a polyline or
    /// vertex upload expects it.
    #[inline]
    pub fn flatten(points: &[Point]) -> &[f64] {
        bytemuck::cast_slice(points)
    }
}

impl Xy for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
