//! Scroll gestures feeding the list.
//!
//! The list only talks to a gesture through [`ScrollGesture`]: once per
//! frame it polls a pixel delta, and after layout it reports the hit region
//! and asks the gesture to stop when it has run into a boundary.

mod scroll;

pub use scroll::{Scroll, ScrollPhase};

use vlist_graphics::{Metrics, Rect};
use vlist_layout::Axis;
use web_time::Instant;

/// Source of per-frame scroll deltas.
pub trait ScrollGesture {
    /// Returns the signed pixel distance scrolled since the previous poll.
    ///
    /// Positive values move content toward the leading edge, revealing
    /// items with higher indices.
    fn poll_delta(&mut self, metrics: Metrics, axis: Axis, now: Instant) -> i32;

    /// Whether a pointer is currently dragging the content.
    fn is_dragging(&self) -> bool;

    /// Cancels any momentum.
    fn stop(&mut self);

    /// Declares the region, in list coordinates, that captures pointer input.
    fn register(&mut self, hit_region: Rect);
}
