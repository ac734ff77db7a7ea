use crate::angle::{degree_to_radian, percent_to_radian, radian_to_degree, radian_to_percent};
use crate::notify::ChangeNotifier;
use crate::precision::round_off;

use super::{Point, Xy};

/// A point expressed in polar form around a pivot.
///
/// Only the pivot (`cx`, `cy`), `radius` and `radian` are stored, each rounded
/// to 7 decimals. Cartesian `x`/`y`, `degree` and `percent` (fraction of a
/// turn) are views computed on every read, so
/// `x == cx + radius·cos(radian)` and `y == cy + radius·sin(radian)` hold after
/// every call.
///
/// Writing a view re-solves the stored fields from the current state:
/// - `set_x` keeps the current `y` and solves `radius` + `radian`
/// - `set_y` keeps the current `x` and solves `radius` + `radian`
/// - `set_degree` / `set_percent` replace `radian` only
///
/// Composite operations (`move_by`, `translate`) run axis by axis: the Y step
/// re-reads the view left behind by the rounded X step.
///
/// The radian is never normalized; repeated rotations grow it without bound.
#[derive(Debug, Default)]
pub struct Coordinate {
    cx: f64,
    cy: f64,
    radius: f64,
    radian: f64,
    notifier: ChangeNotifier,
}

impl Coordinate {
    /// Pivot at the origin, zero radius, zero angle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polar(cx: f64, cy: f64, radius: f64, radian: f64) -> Self {
        Self {
            cx: round_off(cx),
            cy: round_off(cy),
            radius: round_off(radius),
            radian: round_off(radian),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn on_change(mut self, f: impl FnMut() + 'static) -> Self {
        self.notifier.set_listener(f);
        self
    }

    pub fn set_on_change(&mut self, f: impl FnMut() + 'static) -> &mut Self {
        self.notifier.set_listener(f);
        self
    }

    // ── stored fields ─────────────────────────────────────────────────────

    #[inline]
    pub fn cx(&self) -> f64 {
        self.cx
    }

    #[inline]
    pub fn cy(&self) -> f64 {
        self.cy
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn radian(&self) -> f64 {
        self.radian
    }

    pub fn set_cx(&mut self, value: f64) -> &mut Self {
        store(&mut self.cx, value, &mut self.notifier);
        self
    }

    pub fn set_cy(&mut self, value: f64) -> &mut Self {
        store(&mut self.cy, value, &mut self.notifier);
        self
    }

    pub fn set_radius(&mut self, value: f64) -> &mut Self {
        store(&mut self.radius, value, &mut self.notifier);
        self
    }

    pub fn set_radian(&mut self, value: f64) -> &mut Self {
        store(&mut self.radian, value, &mut self.notifier);
        self
    }

    // ── views ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn x(&self) -> f64 {
        round_off(self.cx + self.radius * self.radian.cos())
    }

    #[inline]
    pub fn y(&self) -> f64 {
        round_off(self.cy + self.radius * self.radian.sin())
    }

    #[inline]
    pub fn degree(&self) -> f64 {
        radian_to_degree(self.radian)
    }

    /// Angle as a fraction of a full turn.
    #[inline]
    pub fn percent(&self) -> f64 {
        radian_to_percent(self.radian)
    }

    pub fn point(&self) -> Point {
        Point::new(self.x(), self.y())
    }

    pub fn pivot(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    pub fn set_x(&mut self, value: f64) -> &mut Self {
        let dx = value - self.cx;
        let dy = self.y() - self.cy;
        self.solve(dx, dy)
    }

    pub fn set_y(&mut self, value: f64) -> &mut Self {
        let dx = self.x() - self.cx;
        let dy = value - self.cy;
        self.solve(dx, dy)
    }

    pub fn set_degree(&mut self, value: f64) -> &mut Self {
        self.set_radian(degree_to_radian(value))
    }

    pub fn set_percent(&mut self, value: f64) -> &mut Self {
        self.set_radian(percent_to_radian(value))
    }

    /// Stores the polar form of the offset `(dx, dy)` from the pivot.
    fn solve(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.set_radius(dx.hypot(dy));
        self.set_radian(dy.atan2(dx))
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cx.is_finite() && self.cy.is_finite() && self.radius.is_finite() && self.radian.is_finite()
    }

    // ── motion ────────────────────────────────────────────────────────────

    pub fn move_x(&mut self, dx: f64) -> &mut Self {
        self.set_x(self.x() + dx)
    }

    pub fn move_y(&mut self, dy: f64) -> &mut Self {
        self.set_y(self.y() + dy)
    }

    /// `move_x` then `move_y`.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.move_x(dx);
        self.move_y(dy)
    }

    /// Shifts the pivot horizontally; the Cartesian position stays put.
    pub fn translate_x(&mut self, dx: f64) -> &mut Self {
        let latest_x = self.x();
        self.set_cx(self.cx + dx);
        self.set_x(latest_x)
    }

    /// Shifts the pivot vertically; the Cartesian position stays put.
    pub fn translate_y(&mut self, dy: f64) -> &mut Self {
        let latest_y = self.y();
        self.set_cy(self.cy + dy);
        self.set_y(latest_y)
    }

    /// Moves the pivot, keeping `x` and `y`.
    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.translate_x(dx);
        self.translate_y(dy)
    }

    pub fn rotate(&mut self, radian: f64) -> &mut Self {
        self.set_radian(self.radian + radian)
    }

    pub fn rotate_by_degree(&mut self, degree: f64) -> &mut Self {
        self.rotate(degree_to_radian(degree))
    }

    pub fn rotate_by_percent(&mut self, percent: f64) -> &mut Self {
        self.rotate(percent_to_radian(percent))
    }
}

impl Xy for Coordinate {
    #[inline]
    fn x(&self) -> f64 {
        Coordinate::x(self)
    }
    #[inline]
    fn y(&self) -> f64 {
        Coordinate::y(self)
    }
}

/// Copies the polar state only; the clone has no listener.
impl Clone for Coordinate {
    fn clone(&self) -> Self {
        Self::polar(self.cx, self.cy, self.radius, self.radian)
    }
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.cx == other.cx
            && self.cy == other.cy
            && self.radius == other.radius
            && self.radian == other.radian
    }
}

/// Rounds `value` and writes it, notifying only if the slot changed.
#[inline]
fn store(slot: &mut f64, value: f64, notifier: &mut ChangeNotifier) {
    let value = round_off(value);
    if *slot != value {
        *slot = value;
        notifier.notify();
    }
}
