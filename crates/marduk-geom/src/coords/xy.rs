/// Anything exposing a numeric `x`/`y` pair.
///
/// Used where an operation only needs the two components: a `Point`, a
/// `Distance`, a `Coordinate`'s Cartesian view, or a bare tuple all qualify.
pub trait Xy {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Xy for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Xy for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl<T: Xy + ?Sized> Xy for &T {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }
    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}
