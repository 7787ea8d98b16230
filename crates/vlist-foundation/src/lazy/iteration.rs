//! Viewport filling decisions.
//!
//! The list pulls items one at a time. Before every pull it asks
//! [`decide_direction`] whether the viewport is covered yet and, if not,
//! which side of the window the next item must come from.

use super::Position;

/// Which end of the window the next item is built for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IterationDirection {
    /// No item is needed.
    #[default]
    None,
    /// Append the item after the last one in the window.
    Forward,
    /// Prepend the item before the first one in the window.
    Backward,
}

impl IterationDirection {
    /// True while an item is being requested.
    pub fn is_pending(self) -> bool {
        self != IterationDirection::None
    }
}

/// Snapshot of the fill state the decision is made from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillState {
    /// Main-axis maximum of the viewport.
    pub viewport_main: i32,
    pub item_count: usize,
    /// Number of items built so far this frame.
    pub window_len: usize,
    /// Summed main-axis size of the built items.
    pub max_size: i32,
}

/// Decides whether another item is needed and from which direction.
///
/// Clamps `position` first: the offset is pulled back so the end of the list
/// does not leave trailing space, and never scrolls before the first item.
/// Only then is the direction decided, so a clamped offset can never make
/// the list ask for an item it would immediately discard.
pub fn decide_direction(fill: FillState, position: &mut Position) -> IterationDirection {
    let vsize = fill.viewport_main;
    let last = position.first().saturating_add(fill.window_len);
    // Widened: a saturated offset must not overflow the subtraction.
    let uncovered = |position: &Position| {
        i64::from(fill.max_size) - i64::from(position.offset()) < i64::from(vsize)
    };

    if uncovered(position) && last == fill.item_count {
        position.set_offset(fill.max_size.saturating_sub(vsize));
    }
    if position.offset() < 0 && position.first() == 0 {
        position.set_offset(0);
    }

    if fill.window_len == fill.item_count {
        IterationDirection::None
    } else if uncovered(position) {
        IterationDirection::Forward
    } else if position.offset() < 0 {
        IterationDirection::Backward
    } else {
        IterationDirection::None
    }
}
