//! The list itself: drives the item protocol for one frame at a time.

use std::collections::VecDeque;

use vlist_graphics::{Canvas, DrawRecorder, Rect, INF};
use vlist_layout::{Alignment, Axis, Constraints};

use super::finalizer::{finalize, FrameParams};
use super::{
    decide_direction, BuiltItem, FillState, ItemBuilder, IterationDirection, ListMeasureResult,
    Position, ProtocolError,
};
use crate::context::LayoutContext;
use crate::gesture::{Scroll, ScrollGesture};

/// Upper bound on items built in a single frame.
///
/// Only reached by degenerate lists, e.g. thousands of zero-sized items or
/// an unbounded viewport.
pub const MAX_ITEMS_PER_FRAME: usize = 10_000;

/// Per-list settings. May be changed between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListConfig {
    pub axis: Axis,
    /// Keep the list scrolled to its end once it gets there, and draw
    /// content shorter than the viewport against the trailing edge.
    pub scroll_to_end: bool,
    /// Cross-axis alignment of items narrower than the widest one.
    pub alignment: Alignment,
}

impl ListConfig {
    pub fn vertical() -> Self {
        Self::default()
    }

    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            ..Self::default()
        }
    }

    pub fn scroll_to_end(mut self, scroll_to_end: bool) -> Self {
        self.scroll_to_end = scroll_to_end;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// A virtualized, scrollable list.
///
/// Only the items needed to cover the viewport are built each frame. The
/// usual entry point is [`List::layout`]; the lower-level protocol
/// ([`begin_frame`](List::begin_frame), [`request_next`](List::request_next),
/// [`current_index`](List::current_index), [`submit_item`](List::submit_item),
/// [`finish`](List::finish)) is exposed for callers that build items
/// themselves:
///
/// ```rust,ignore
/// list.begin_frame(&ctx, len)?;
/// while list.request_next()?.is_pending() {
///     let index = list.current_index()?;
///     list.submit_item(build(index))?;
/// }
/// let result = list.finish(&mut canvas)?;
/// ```
///
/// Any [`ProtocolError`] means the frame must be abandoned.
#[derive(Debug)]
pub struct List<G: ScrollGesture = Scroll> {
    pub config: ListConfig,
    position: Position,
    gesture: G,

    constraints: Constraints,
    /// Gesture plus programmatic delta consumed this frame.
    scroll_delta: i32,
    /// Programmatic delta waiting for the next frame.
    pending_delta: i32,
    len: usize,
    /// Summed main-axis size of the window.
    max_size: i32,
    window: VecDeque<BuiltItem>,
    dir: IterationDirection,
}

impl Default for List<Scroll> {
    fn default() -> Self {
        Self::new(ListConfig::default())
    }
}

impl List<Scroll> {
    pub fn new(config: ListConfig) -> Self {
        Self::with_gesture(config, Scroll::new())
    }
}

impl<G: ScrollGesture> List<G> {
    pub fn with_gesture(config: ListConfig, gesture: G) -> Self {
        Self {
            config,
            position: Position::default(),
            gesture,
            constraints: Constraints::loose(0, 0),
            scroll_delta: 0,
            pending_delta: 0,
            len: 0,
            max_size: 0,
            window: VecDeque::new(),
            dir: IterationDirection::None,
        }
    }

    /// Scroll position as of the last layout. Save this to restore the list later.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Replaces the scroll position used by the next layout.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Scrolls so that item `index` starts at the leading edge.
    pub fn scroll_to(&mut self, index: usize) {
        self.position = Position::new(index, 0);
    }

    /// Scrolls by `pixels` on the next layout, in addition to gesture input.
    pub fn scroll_by(&mut self, pixels: i32) {
        self.pending_delta = self.pending_delta.saturating_add(pixels);
    }

    /// Whether the list is being dragged.
    pub fn dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn gesture(&self) -> &G {
        &self.gesture
    }

    pub fn gesture_mut(&mut self) -> &mut G {
        &mut self.gesture
    }

    /// True when the list is configured to stick to its end and currently does.
    pub fn is_pinned_to_end(&self) -> bool {
        self.config.scroll_to_end && !self.position.before_end()
    }

    /// Lays out the list, building the visible items with `builder` and
    /// emitting them onto `canvas`.
    ///
    /// Items are built against constraints that leave the main axis
    /// unbounded and pass the viewport's cross-axis constraints through.
    pub fn layout(
        &mut self,
        ctx: &LayoutContext,
        canvas: &mut impl Canvas,
        item_count: usize,
        mut builder: impl ItemBuilder,
    ) -> Result<ListMeasureResult, ProtocolError> {
        self.begin_frame(ctx, item_count)?;

        let (cross_min, cross_max) = self.config.axis.cross_constraint(&ctx.constraints);
        let item_constraints = self.config.axis.constraints(0, INF, cross_min, cross_max);

        let mut built = 0;
        while self.request_next()?.is_pending() {
            if built == MAX_ITEMS_PER_FRAME {
                log::warn!(
                    "list built {} items in one frame without covering its viewport; stopping",
                    built
                );
                self.settle_truncated_run();
                break;
            }
            let index = self.current_index()?;
            let mut recorder = DrawRecorder::new();
            let size = builder.build(index, item_constraints, &mut recorder);
            self.submit_item(BuiltItem::new(size, recorder.finish()))?;
            built += 1;
        }

        self.finish(canvas)
    }

    /// Starts a frame: resets the window and applies this frame's scroll delta.
    pub fn begin_frame(
        &mut self,
        ctx: &LayoutContext,
        item_count: usize,
    ) -> Result<(), ProtocolError> {
        if self.dir.is_pending() {
            return Err(self.abandon(ProtocolError::UnfinishedItem));
        }
        let axis = self.config.axis;
        self.constraints = ctx.constraints;
        self.max_size = 0;
        self.window.clear();
        self.len = item_count;

        let (_, main_max) = axis.main_constraint(&self.constraints);
        if main_max >= INF {
            log::warn!("list laid out with an unbounded main axis; all items will be built");
        }

        let delta = self
            .gesture
            .poll_delta(ctx.metrics, axis, ctx.now)
            .saturating_add(std::mem::take(&mut self.pending_delta));
        self.scroll_delta = delta;
        self.position.add_offset(delta);

        // Pinned lists fill backward from the end; the delta is applied once
        // the list knows whether it stays pinned.
        if self.is_pinned_to_end() || self.position.first() > item_count {
            self.position.set_offset(0);
            self.position.set_first(item_count);
        }
        Ok(())
    }

    /// Decides whether another item is needed and, if so, from which side.
    ///
    /// Returns [`IterationDirection::None`] once the viewport is covered or
    /// the list is exhausted.
    pub fn request_next(&mut self) -> Result<IterationDirection, ProtocolError> {
        if self.dir.is_pending() {
            return Err(self.abandon(ProtocolError::RequestPending));
        }
        self.dir = self.next_direction();
        if self.is_pinned_to_end() && !self.dir.is_pending() && self.scroll_delta < 0 {
            log::trace!("scrolled away from the end, unpinning list");
            self.position.set_before_end(true);
            self.position.add_offset(self.scroll_delta);
            self.dir = self.next_direction();
        }
        Ok(self.dir)
    }

    /// Drops the outstanding request so the next frame can start cleanly.
    fn abandon(&mut self, error: ProtocolError) -> ProtocolError {
        self.dir = IterationDirection::None;
        error.raise()
    }

    /// Ends a run cut short by [`MAX_ITEMS_PER_FRAME`], moving the offset
    /// onto the built items so the frame still shows them.
    fn settle_truncated_run(&mut self) {
        let (_, viewport_main) = self.config.axis.main_constraint(&self.constraints);
        let offset = self.position.offset();
        let settled = match self.dir {
            // Trailing edge of the window onto the trailing edge of the viewport.
            IterationDirection::Forward => offset
                .min(self.max_size.saturating_sub(viewport_main))
                .max(0),
            // Leading edge of the window onto the leading edge of the viewport.
            IterationDirection::Backward => offset.max(0),
            IterationDirection::None => offset,
        };
        self.position.set_offset(settled);
        self.dir = IterationDirection::None;
    }

    fn next_direction(&mut self) -> IterationDirection {
        let (_, viewport_main) = self.config.axis.main_constraint(&self.constraints);
        let fill = FillState {
            viewport_main,
            item_count: self.len,
            window_len: self.window.len(),
            max_size: self.max_size,
        };
        decide_direction(fill, &mut self.position)
    }

    /// Index of the item the caller must build next.
    pub fn current_index(&self) -> Result<usize, ProtocolError> {
        match self.dir {
            IterationDirection::Backward => Ok(self.position.first() - 1),
            IterationDirection::Forward => Ok(self.position.first() + self.window.len()),
            IterationDirection::None => Err(ProtocolError::NoRequest.raise()),
        }
    }

    /// Records the item built for [`current_index`](Self::current_index).
    pub fn submit_item(&mut self, item: BuiltItem) -> Result<(), ProtocolError> {
        let main = self.config.axis.main(item.size);
        match self.dir {
            IterationDirection::Forward => self.window.push_back(item),
            IterationDirection::Backward => {
                self.window.push_front(item);
                self.position.set_first(self.position.first() - 1);
                self.position.add_offset(main);
            }
            IterationDirection::None => return Err(ProtocolError::NoRequest.raise()),
        }
        self.max_size = self.max_size.saturating_add(main);
        self.dir = IterationDirection::None;
        Ok(())
    }

    /// Places the built items, updates the position and emits the content
    /// plus a hit region covering the list onto `canvas`.
    pub fn finish(&mut self, canvas: &mut impl Canvas) -> Result<ListMeasureResult, ProtocolError> {
        if self.dir.is_pending() {
            return Err(self.abandon(ProtocolError::UnfinishedItem));
        }
        let (main_min, main_max) = self.config.axis.main_constraint(&self.constraints);
        let params = FrameParams {
            axis: self.config.axis,
            alignment: self.config.alignment,
            scroll_to_end: self.config.scroll_to_end,
            main_min,
            main_max,
            item_count: self.len,
        };
        let (result, content) = finalize(params, &mut self.window, &mut self.position);

        if result.at_start && self.scroll_delta < 0 || result.at_end && self.scroll_delta > 0 {
            log::debug!("list hit a boundary with delta {}", self.scroll_delta);
            self.gesture.stop();
        }

        let bounds = Rect::from_size(result.size);
        canvas.hit_region(bounds);
        self.gesture.register(bounds);
        canvas.replay(&content);
        Ok(result)
    }
}
