//! Geometric value models shared by interactive widgets.
//!
//! Canonical space matches the engine:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down (so positive angles turn clockwise on screen)
//!
//! `Point` and `Distance` are plain `Copy` values. `Rect` and `Coordinate` are
//! mutable models that fire a [`ChangeNotifier`](crate::notify::ChangeNotifier)
//! whenever one of their stored fields actually changes.

mod coordinate;
mod distance;
mod point;
mod rect;
mod xy;

pub use coordinate::Coordinate;
pub use distance::Distance;
pub use point::Point;
pub use rect::{ClientRect, INFINITY_HEIGHT, INFINITY_LEFT, INFINITY_TOP, INFINITY_WIDTH, Rect, RectLike};
pub use xy::Xy;
