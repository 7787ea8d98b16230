//! Shared gesture thresholds, in dp or dp/s.
//!
//! Scaled to pixels with the frame's [`Metrics`](vlist_graphics::Metrics).

/// Distance a pointer must travel along the main axis before a press turns
/// into a scroll drag.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Release velocities below this do not start a fling.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Release velocities are capped to this before planning a fling.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;
