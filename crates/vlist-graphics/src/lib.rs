//! Pure math/data for drawing in vlist
//!
//! This crate contains integer geometry primitives, colors, density units,
//! and the replayable draw recording used to hand item content to the list.

mod color;
mod draw;
mod geometry;
mod unit;

pub use color::*;
pub use draw::*;
pub use geometry::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::draw::{Canvas, DrawHandle, DrawRecorder, Painter};
    pub use crate::geometry::{Point, Rect, Size, Vec2, INF};
    pub use crate::unit::{Dp, Metrics};
}
