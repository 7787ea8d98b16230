//! Drag, wheel and fling scrolling.

use vlist_animation::{DecayFling, FlingInfo};
use vlist_graphics::{Dp, Metrics, Rect};
use vlist_layout::Axis;
use web_time::Instant;

use super::ScrollGesture;
use crate::gesture_constants::{DRAG_THRESHOLD, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};
use crate::input::{PointerEvent, PointerEventKind, PointerId};
use crate::velocity_tracker::VelocityTracker1D;

/// What the gesture is currently doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    Dragging,
    Flinging,
}

#[derive(Clone, Copy, Debug)]
struct Drag {
    pointer: PointerId,
    /// Main-axis pointer position at the last applied delta.
    last: f32,
    /// Set once the pointer has moved past the touch slop.
    scrolling: bool,
}

#[derive(Clone, Copy, Debug)]
struct ActiveFling {
    info: FlingInfo,
    start: Instant,
    travelled: f32,
}

/// Turns pointer input into per-frame scroll deltas.
///
/// Feed it events with [`Scroll::on_pointer_event`]; the list polls it once
/// per layout. Pixel fractions left over from drags and flings carry over to
/// the next poll so slow motion is not lost to rounding.
#[derive(Debug)]
pub struct Scroll {
    axis: Axis,
    metrics: Metrics,
    hit_region: Option<Rect>,
    drag: Option<Drag>,
    tracker: VelocityTracker1D,
    epoch: Option<Instant>,
    fling: Option<ActiveFling>,
    pending: f32,
    remainder: f32,
}

impl Default for Scroll {
    fn default() -> Self {
        Self::new()
    }
}

impl Scroll {
    pub fn new() -> Self {
        Self {
            axis: Axis::Vertical,
            metrics: Metrics::default(),
            hit_region: None,
            drag: None,
            tracker: VelocityTracker1D::new(),
            epoch: None,
            fling: None,
            pending: 0.0,
            remainder: 0.0,
        }
    }

    pub fn phase(&self) -> ScrollPhase {
        if self.is_dragging() {
            ScrollPhase::Dragging
        } else if self.fling.is_some() {
            ScrollPhase::Flinging
        } else {
            ScrollPhase::Idle
        }
    }

    /// The region registered by the last layout, if any.
    pub fn hit_region(&self) -> Option<Rect> {
        self.hit_region
    }

    fn time_ms(&self, now: Instant) -> i64 {
        self.epoch
            .map(|epoch| now.duration_since(epoch).as_millis() as i64)
            .unwrap_or(0)
    }

    fn accepts(&self, event: &PointerEvent) -> bool {
        !event.is_consumed()
            && self
                .hit_region
                .map_or(true, |region| region.contains(event.position))
    }

    /// Handles a pointer event in list coordinates.
    ///
    /// Returns true if the event was relevant to this gesture. Moves are
    /// consumed once the drag has passed the touch slop.
    pub fn on_pointer_event(&mut self, event: &PointerEvent, now: Instant) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if self.drag.is_some() || !self.accepts(event) {
                    return false;
                }
                // Touching the content catches a running fling.
                self.fling = None;
                self.tracker.reset();
                self.epoch = Some(now);
                let position = self.axis.main_f32(event.position);
                self.tracker.add_data_point(0, position);
                self.drag = Some(Drag {
                    pointer: event.id,
                    last: position,
                    scrolling: false,
                });
                true
            }
            PointerEventKind::Move => {
                let Some(mut drag) = self.drag.filter(|d| d.pointer == event.id) else {
                    return false;
                };
                let position = self.axis.main_f32(event.position);
                let time_ms = self.time_ms(now);
                self.tracker.add_data_point(time_ms, position);

                if !drag.scrolling {
                    let slop = self.metrics.dp_f32(Dp(DRAG_THRESHOLD));
                    if (position - drag.last).abs() >= slop {
                        drag.scrolling = true;
                        log::trace!("scroll drag started for pointer {}", drag.pointer);
                    }
                }
                if drag.scrolling {
                    // Content follows the pointer: moving toward the leading
                    // edge scrolls forward.
                    self.pending += drag.last - position;
                    drag.last = position;
                    event.consume();
                }
                self.drag = Some(drag);
                true
            }
            PointerEventKind::Up => {
                let Some(drag) = self.drag.filter(|d| d.pointer == event.id) else {
                    return false;
                };
                self.drag = None;
                if !drag.scrolling {
                    return true;
                }
                let position = self.axis.main_f32(event.position);
                self.pending += drag.last - position;
                let time_ms = self.time_ms(now);
                self.tracker.add_data_point(time_ms, position);

                let px_per_dp = self.metrics.px_per_dp;
                let velocity =
                    -self.tracker.calculate_velocity_with_max(MAX_FLING_VELOCITY * px_per_dp);
                if velocity.abs() >= MIN_FLING_VELOCITY * px_per_dp {
                    let info = DecayFling::with_density(px_per_dp).fling_info(velocity);
                    log::debug!(
                        "fling started at {:.0}px/s for {}ms",
                        velocity,
                        info.duration_ms
                    );
                    self.fling = Some(ActiveFling {
                        info,
                        start: now,
                        travelled: 0.0,
                    });
                }
                true
            }
            PointerEventKind::Cancel => {
                let cancelled = self.drag.take().is_some();
                self.tracker.reset();
                cancelled
            }
            PointerEventKind::Scroll => {
                if !self.accepts(event) {
                    return false;
                }
                self.fling = None;
                self.pending += self.axis.main_f32(event.scroll_delta);
                event.consume();
                true
            }
        }
    }
}

impl ScrollGesture for Scroll {
    fn poll_delta(&mut self, metrics: Metrics, axis: Axis, now: Instant) -> i32 {
        if axis != self.axis {
            self.axis = axis;
            self.drag = None;
            self.fling = None;
        }
        self.metrics = metrics;

        let mut total = std::mem::take(&mut self.pending);
        if let Some(fling) = self.fling.as_mut() {
            let elapsed_ms = now.duration_since(fling.start).as_millis() as i64;
            let position = fling.info.position(elapsed_ms);
            total += position - fling.travelled;
            fling.travelled = position;
            if fling.info.is_finished(elapsed_ms) {
                log::trace!("fling finished after {}ms", elapsed_ms);
                self.fling = None;
            }
        }

        total += self.remainder;
        let whole = total.trunc();
        self.remainder = total - whole;
        whole as i32
    }

    fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|drag| drag.scrolling)
    }

    fn stop(&mut self) {
        if self.fling.take().is_some() {
            log::debug!("fling stopped at list boundary");
        }
        self.remainder = 0.0;
    }

    fn register(&mut self, hit_region: Rect) {
        self.hit_region = Some(hit_region);
    }
}
