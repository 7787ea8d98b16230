//! Turns the built window into placed, clipped draw commands.

use std::collections::VecDeque;

use vlist_graphics::{Canvas, DrawHandle, DrawRecorder, Rect, Size, INF};
use vlist_layout::{Alignment, Axis};

use super::{BuiltItem, Position};

/// An item as it was placed in the list's coordinate space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedItem {
    pub index: usize,
    /// Leading edge on the main axis. Negative when partially scrolled out.
    pub main_offset: i32,
    pub cross_offset: i32,
    pub size: Size,
    /// Visible part of the item; unbounded on the cross axis.
    pub clip: Rect,
}

/// Outcome of one list layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListMeasureResult {
    /// Size the list occupies.
    pub size: Size,
    pub first_visible: usize,
    /// Items drawn this frame, leading first.
    pub placed: Vec<PlacedItem>,
    pub at_start: bool,
    pub at_end: bool,
}

impl ListMeasureResult {
    pub fn visible_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.placed.iter().map(|item| item.index)
    }
}

/// Frame parameters the finalizer needs from the list.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FrameParams {
    pub axis: Axis,
    pub alignment: Alignment,
    pub scroll_to_end: bool,
    pub main_min: i32,
    pub main_max: i32,
    pub item_count: usize,
}

/// Trims `window` to the visible items, normalizes `position` and records
/// the placed items into a single handle.
pub(crate) fn finalize(
    params: FrameParams,
    window: &mut VecDeque<BuiltItem>,
    position: &mut Position,
) -> (ListMeasureResult, DrawHandle) {
    let axis = params.axis;
    let main_max = params.main_max;

    // Items that scrolled entirely past the leading edge. An item ending
    // exactly on the edge is dropped too, so a list scrolled to its end
    // reports the first item that is actually visible.
    while let Some(front) = window.front() {
        let main = axis.main(front.size);
        if position.offset() < main || position.offset() <= 0 {
            break;
        }
        position.set_first(position.first() + 1);
        position.set_offset(position.offset() - main);
        window.pop_front();
    }

    // Running extents are widened so a saturated offset cannot overflow.
    let mut size = -i64::from(position.offset());
    let mut max_cross = 0;
    let mut retained = window.len();
    for (i, item) in window.iter().enumerate() {
        max_cross = max_cross.max(axis.cross(item.size));
        size += i64::from(axis.main(item.size));
        if size >= i64::from(main_max) {
            retained = i + 1;
            break;
        }
    }
    window.truncate(retained);

    let mut pos = position.offset().saturating_neg();
    let space = i64::from(main_max) - size;
    if params.scroll_to_end && space > 0 {
        pos = pos.saturating_add(i32::try_from(space).unwrap_or(i32::MAX));
    }

    let mut recorder = DrawRecorder::new();
    let mut placed = Vec::with_capacity(window.len());
    for (i, item) in window.iter().enumerate() {
        let cross = params
            .alignment
            .align(max_cross, axis.cross(item.size));
        let main = axis.main(item.size);
        let clip = Rect::from_min_max(
            axis.point(pos.max(0), -INF),
            axis.point(pos.saturating_add(main).min(main_max), INF),
        );

        recorder.push_clip(clip);
        recorder.push_offset(axis.point(pos, cross));
        recorder.replay(&item.handle);
        recorder.pop_offset();
        recorder.pop_clip();

        placed.push(PlacedItem {
            index: position.first() + i,
            main_offset: pos,
            cross_offset: cross,
            size: item.size,
            clip,
        });
        pos = pos.saturating_add(main);
    }

    let at_start = position.first() == 0 && position.offset() <= 0;
    let at_end = position.first() + window.len() == params.item_count && main_max >= pos;
    position.set_before_end(!at_end);

    // Not `clamp`: a malformed constraint with min > max must not panic.
    let main_extent = pos.max(params.main_min).min(main_max);
    let result = ListMeasureResult {
        size: axis.size(main_extent, max_cross),
        first_visible: position.first(),
        placed,
        at_start,
        at_end,
    };
    (result, recorder.finish())
}
