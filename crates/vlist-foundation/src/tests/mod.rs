mod list_tests;

use std::collections::VecDeque;

use vlist_graphics::{Color, DrawRecorder, Metrics, Rect, Size};
use vlist_layout::{Axis, Constraints};
use web_time::Instant;

use crate::context::LayoutContext;
use crate::gesture::ScrollGesture;

/// Gesture that replays scripted deltas and records what the list asked of it.
#[derive(Debug, Default)]
pub(crate) struct ScriptedGesture {
    pub deltas: VecDeque<i32>,
    pub stops: usize,
    pub registered: Option<Rect>,
    pub dragging: bool,
}

impl ScriptedGesture {
    pub fn push(&mut self, delta: i32) {
        self.deltas.push_back(delta);
    }
}

impl ScrollGesture for ScriptedGesture {
    fn poll_delta(&mut self, _metrics: Metrics, _axis: Axis, _now: Instant) -> i32 {
        self.deltas.pop_front().unwrap_or(0)
    }

    fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn stop(&mut self) {
        self.stops += 1;
    }

    fn register(&mut self, hit_region: Rect) {
        self.registered = Some(hit_region);
    }
}

/// Vertical viewport `width` wide and `height` tall.
pub(crate) fn viewport(width: i32, height: i32) -> LayoutContext {
    LayoutContext::new(Constraints::loose(width, height), Instant::now())
}

/// Builder producing items of a fixed size, each filled with one rectangle.
pub(crate) fn uniform(size: Size) -> impl FnMut(usize, Constraints, &mut DrawRecorder) -> Size {
    move |_index, _constraints, recorder| {
        recorder.fill_rect(Rect::from_size(size), Color::BLUE);
        size
    }
}
