use std::cell::Cell;
use std::rc::Rc;

use crate::notify::ChangeNotifier;

use super::{Point, Xy};

/// Left edge of the unbounded limit.
pub const INFINITY_LEFT: f64 = -f64::MAX / 2.0;
/// Top edge of the unbounded limit.
pub const INFINITY_TOP: f64 = -f64::MAX / 2.0;
/// Width of the unbounded limit.
pub const INFINITY_WIDTH: f64 = f64::MAX;
/// Height of the unbounded limit.
pub const INFINITY_HEIGHT: f64 = f64::MAX;

/// Anything exposing `left`/`top`/`width`/`height`.
pub trait RectLike {
    fn left(&self) -> f64;
    fn top(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

impl<T: RectLike + ?Sized> RectLike for &T {
    fn left(&self) -> f64 {
        (**self).left()
    }
    fn top(&self) -> f64 {
        (**self).top()
    }
    fn width(&self) -> f64 {
        (**self).width()
    }
    fn height(&self) -> f64 {
        (**self).height()
    }
}

/// Measured on-screen bounds of an element, relative to the visible area.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ClientRect {
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
}

impl RectLike for ClientRect {
    fn left(&self) -> f64 {
        self.left
    }
    fn top(&self) -> f64 {
        self.top
    }
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
}

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Stores `left`, `top`, `width`, `height`; every other edge, the ratio and
/// the nine anchor points are derived on read. Sizes may be negative and are
/// never validated.
///
/// `zoom` and `move_*` are clamped against an optional limit rect. The limit is
/// shared, not copied: every later write to the limit rect is seen by the next
/// clamped call, including one made from the limit's own change listener.
/// Without a limit, the unbounded [`Rect::infinity`] bounds apply.
///
/// Each setter fires the change listener once when the stored value changes
/// and stays silent when it does not.
#[derive(Debug, Default)]
pub struct Rect {
    geometry: Rc<Cell<Geometry>>,
    limit: Option<Rc<Cell<Geometry>>>,
    notifier: ChangeNotifier,
}

/// The four stored fields of a [`Rect`].
///
/// Kept in a shared `Cell` so that rects limited by this one read it without
/// borrowing the owner.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
struct Geometry {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Geometry {
    const INFINITY: Geometry = Geometry {
        left: INFINITY_LEFT,
        top: INFINITY_TOP,
        width: INFINITY_WIDTH,
        height: INFINITY_HEIGHT,
    };
}

impl Rect {
    #[inline]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            geometry: Rc::new(Cell::new(Geometry { left, top, width, height })),
            limit: None,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Same as [`Rect::new`]; reads better at call sites building fixtures.
    #[inline]
    pub fn of(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, width, height)
    }

    /// The unbounded rect used when no limit is set.
    pub fn infinity() -> Self {
        Self::new(INFINITY_LEFT, INFINITY_TOP, INFINITY_WIDTH, INFINITY_HEIGHT)
    }

    /// Copies the geometry of any rect-shaped value.
    pub fn from_rect(rect: &impl RectLike) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }

    /// Builds a rect from measured client bounds, shifted by the scroll offset.
    ///
    /// The shift goes through [`Rect::move_by`], so it is subject to the
    /// (unbounded) limit like any other move.
    pub fn from_client_rect(rect: &impl RectLike, scroll_x: f64, scroll_y: f64) -> Self {
        let mut r = Self::from_rect(rect);
        r.move_by(scroll_x, scroll_y);
        r
    }

    /// Smallest rect covering every rect in `rects`.
    ///
    /// An empty input yields `left`/`top` of `+inf` and `width`/`height` of `-inf`.
    pub fn union<I>(rects: I) -> Self
    where
        I: IntoIterator,
        I::Item: RectLike,
    {
        let mut left = f64::INFINITY;
        let mut top = f64::INFINITY;
        let mut right = f64::NEG_INFINITY;
        let mut bottom = f64::NEG_INFINITY;
        for r in rects {
            left = min_nan(left, r.left());
            top = min_nan(top, r.top());
            right = max_nan(right, r.left() + r.width());
            bottom = max_nan(bottom, r.top() + r.height());
        }
        Self::new(left, top, right - left, bottom - top)
    }

    /// Smallest rect covering every point in `points`.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Xy,
    {
        let mut left = f64::INFINITY;
        let mut top = f64::INFINITY;
        let mut right = f64::NEG_INFINITY;
        let mut bottom = f64::NEG_INFINITY;
        for p in points {
            left = min_nan(left, p.x());
            top = min_nan(top, p.y());
            right = max_nan(right, p.x());
            bottom = max_nan(bottom, p.y());
        }
        Self::new(left, top, right - left, bottom - top)
    }

    // ── change listener ───────────────────────────────────────────────────

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
    pub fn left(&self) -> f64 {
        self.geometry.get().left
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.geometry.get().top
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.geometry.get().width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.geometry.get().height
    }

    pub fn set_left(&mut self, value: f64) -> &mut Self {
        self.write(value, |g| &mut g.left)
    }

    pub fn set_top(&mut self, value: f64) -> &mut Self {
        self.write(value, |g| &mut g.top)
    }

    pub fn set_width(&mut self, value: f64) -> &mut Self {
        self.write(value, |g| &mut g.width)
    }

    pub fn set_height(&mut self, value: f64) -> &mut Self {
        self.write(value, |g| &mut g.height)
    }

    pub fn add_width(&mut self, delta: f64) -> &mut Self {
        self.set_width(self.width() + delta)
    }

    pub fn add_height(&mut self, delta: f64) -> &mut Self {
        self.set_height(self.height() + delta)
    }

    // ── derived values ────────────────────────────────────────────────────

    #[inline]
    pub fn right(&self) -> f64 {
        self.left() + self.width()
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top() + self.height()
    }

    /// `width / height`; infinite or NaN for a zero height.
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.width() / self.height()
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width() / 2.0
    }

    #[inline]
    pub fn half_height(&self) -> f64 {
        self.height() / 2.0
    }

    #[inline]
    pub fn center_x(&self) -> f64 {
        self.left() + self.half_width()
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top() + self.half_height()
    }

    pub fn left_top(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    pub fn left_middle(&self) -> Point {
        Point::new(self.left(), self.center_y())
    }

    pub fn left_bottom(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn center_top(&self) -> Point {
        Point::new(self.center_x(), self.top())
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    pub fn center_bottom(&self) -> Point {
        Point::new(self.center_x(), self.bottom())
    }

    pub fn right_top(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    pub fn right_middle(&self) -> Point {
        Point::new(self.right(), self.center_y())
    }

    pub fn right_bottom(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        let g = self.geometry.get();
        g.left.is_finite() && g.top.is_finite() && g.width.is_finite() && g.height.is_finite()
    }

    // ── limit ─────────────────────────────────────────────────────────────

    /// Bounds later `zoom` / `move_*` calls by `limit`. Does not move or resize
    /// this rect.
    ///
    /// The limit's geometry is shared, not copied, and outlives `limit` itself.
    pub fn limit_to(&mut self, limit: &Rect) -> &mut Self {
        self.limit = Some(Rc::clone(&limit.geometry));
        self
    }

    /// Drops the limit; the unbounded rect applies again.
    pub fn clear_limit(&mut self) -> &mut Self {
        self.limit = None;
        self
    }

    /// Snapshot of the current limit, if one is set.
    pub fn limit(&self) -> Option<Rect> {
        self.limit.as_ref().map(|g| {
            let g = g.get();
            Rect::new(g.left, g.top, g.width, g.height)
        })
    }

    fn limit_bounds(&self) -> Geometry {
        self.limit.as_ref().map_or(Geometry::INFINITY, |g| g.get())
    }

    /// Writes one field, notifying only if it changed.
    fn write(&mut self, value: f64, field: fn(&mut Geometry) -> &mut f64) -> &mut Self {
        let mut g = self.geometry.get();
        let slot = field(&mut g);
        if *slot != value {
            *slot = value;
            self.geometry.set(g);
            self.notifier.notify();
        }
        self
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    /// Scales position and size together about `(0, 0)`.
    ///
    /// `scale` is first reduced so that neither dimension grows past the
    /// limit's.
    pub fn zoom(&mut self, scale: f64) -> &mut Self {
        let limit = self.limit_bounds();
        let clamped = min_nan(
            min_nan(scale, limit.width / self.width()),
            limit.height / self.height(),
        );
        if clamped != scale {
            log::trace!("zoom {scale} clamped to {clamped} by limit");
        }

        self.set_left(self.left() * clamped);
        self.set_top(self.top() * clamped);
        self.set_width(self.width() * clamped);
        self.set_height(self.height() * clamped)
    }

    /// Zooms as far as the limit allows.
    pub fn zoom_to_max(&mut self) -> &mut Self {
        self.zoom(f64::MAX)
    }

    pub fn zoom_to_width(&mut self, width: f64) -> &mut Self {
        self.zoom(width / self.width())
    }

    pub fn zoom_to_height(&mut self, height: f64) -> &mut Self {
        self.zoom(height / self.height())
    }

    // ── move ──────────────────────────────────────────────────────────────

    /// Shifts horizontally, keeping the rect inside the limit.
    ///
    /// When the rect is wider than the limit the clamp range is inverted and
    /// the result is `limit.right - width`.
    pub fn move_x(&mut self, dx: f64) -> &mut Self {
        let limit = self.limit_bounds();
        let min_left = limit.left;
        let max_left = limit.left + limit.width - self.width();
        let left = clamp_inverted(self.left() + dx, min_left, max_left);
        if left != self.left() + dx {
            log::trace!("move_x {dx} clamped to left {left}");
        }
        self.set_left(left)
    }

    /// Shifts vertically, keeping the rect inside the limit.
    pub fn move_y(&mut self, dy: f64) -> &mut Self {
        let limit = self.limit_bounds();
        let min_top = limit.top;
        let max_top = limit.top + limit.height - self.height();
        let top = clamp_inverted(self.top() + dy, min_top, max_top);
        if top != self.top() + dy {
            log::trace!("move_y {dy} clamped to top {top}");
        }
        self.set_top(top)
    }

    /// `move_x` then `move_y`; the axes are clamped independently.
    pub fn move_by(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.move_x(dx);
        self.move_y(dy)
    }

    pub fn move_to(&mut self, left: f64, top: f64) -> &mut Self {
        self.move_by(left - self.left(), top - self.top())
    }

    /// Moves so that the center lands on `(x, y)`, subject to the limit.
    pub fn center_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.move_to(x - self.half_width(), y - self.half_height())
    }

    // ── translate ─────────────────────────────────────────────────────────

    /// Re-origins the horizontal frame while keeping the visible position.
    ///
    /// A rect has no pivot separate from its edges, so `left` is shifted by
    /// `dx` and then restored. Listeners see both writes.
    pub fn translate_x(&mut self, dx: f64) -> &mut Self {
        let latest_left = self.left();
        self.set_left(self.left() + dx);
        self.set_left(latest_left)
    }

    /// Vertical counterpart of [`Rect::translate_x`].
    pub fn translate_y(&mut self, dy: f64) -> &mut Self {
        let latest_top = self.top();
        self.set_top(self.top() + dy);
        self.set_top(latest_top)
    }

    pub fn translate(&mut self, dx: f64, dy: f64) -> &mut Self {
        self.translate_x(dx);
        self.translate_y(dy)
    }

    // ── bulk assignment ───────────────────────────────────────────────────

    /// Sets the four edges directly. No limit clamping.
    pub fn change_to(&mut self, left: f64, top: f64, right: f64, bottom: f64) -> &mut Self {
        self.set_left(left);
        self.set_top(top);
        self.set_width(right - left);
        self.set_height(bottom - top)
    }

    /// Copies geometry from `other`. The limit and listener are kept.
    pub fn copy_from(&mut self, other: &impl RectLike) -> &mut Self {
        self.set_left(other.left());
        self.set_top(other.top());
        self.set_width(other.width());
        self.set_height(other.height())
    }

    /// Exact comparison of the four stored fields. The limit is ignored.
    pub fn equals(&self, other: &impl RectLike) -> bool {
        self.left() == other.left()
            && self.top() == other.top()
            && self.width() == other.width()
            && self.height() == other.height()
    }
}

impl RectLike for Rect {
    fn left(&self) -> f64 {
        Rect::left(self)
    }
    fn top(&self) -> f64 {
        Rect::top(self)
    }
    fn width(&self) -> f64 {
        Rect::width(self)
    }
    fn height(&self) -> f64 {
        Rect::height(self)
    }
}

/// Copies the geometry only; the clone has no limit and no listener.
impl Clone for Rect {
    fn clone(&self) -> Self {
        Self::from_rect(self)
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// `min(max(value, lo), hi)`. Yields `hi` when `lo > hi`; NaN anywhere yields NaN.
#[inline]
fn clamp_inverted(value: f64, lo: f64, hi: f64) -> f64 {
    min_nan(max_nan(value, lo), hi)
}

// f64::min/max drop NaN operands; these keep them.

#[inline]
fn min_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.min(b) }
}

#[inline]
fn max_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { a.max(b) }
}
