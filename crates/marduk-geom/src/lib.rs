//! Marduk geometry crate.
//!
//! Mutable geometric value models that back interactive widgets: draggable and
//! rotatable handles, chart axes, clipped or zoomable viewports.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`coords`] | `Point`, `Distance`, `Rect`, `Coordinate`, the `Xy` / `RectLike` traits |
//! | [`angle`] | degree / radian / turn conversions |
//! | [`precision`] | fixed-precision rounding shared by every stored value |
//! | [`notify`] | `ChangeNotifier`, the hook fired after each effective mutation |
//! | `logging` | `init_logging` (with the `logger` feature) |
//!
//! # Quick start
//!
//! ```rust
//! use marduk_geom::coords::{Coordinate, Rect};
//!
//! let mut viewport = Rect::of(0.0, 0.0, 100.0, 50.0);
//! viewport.zoom_to_width(200.0);
//! assert_eq!(viewport.height(), 100.0);
//!
//! let mut knob = Coordinate::polar(0.0, 0.0, 10.0, 0.0);
//! knob.rotate_by_degree(90.0);
//! assert!((knob.y() - 10.0).abs() < 1e-7);
//! ```

pub mod angle;
pub mod coords;
#[cfg(feature = "logger")]
pub mod logging;
pub mod notify;
pub mod precision;
