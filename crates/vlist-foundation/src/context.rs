//! Per-frame layout context.

use vlist_graphics::Metrics;
use vlist_layout::Constraints;
use web_time::Instant;

/// Everything a list needs to know about the frame it is laid out in.
#[derive(Clone, Copy, Debug)]
pub struct LayoutContext {
    /// Viewport constraints; the main-axis maximum is the viewport extent.
    pub constraints: Constraints,
    pub metrics: Metrics,
    /// Frame time, used to advance flings.
    pub now: Instant,
}

impl LayoutContext {
    pub fn new(constraints: Constraints, now: Instant) -> Self {
        Self {
            constraints,
            metrics: Metrics::default(),
            now,
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }
}
