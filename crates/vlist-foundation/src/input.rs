//! Pointer input handed to scroll gestures.

use std::cell::Cell;
use std::rc::Rc;

use vlist_graphics::Vec2;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    /// Mouse wheel or touchpad scroll; the amount is in [`PointerEvent::scroll_delta`].
    Scroll,
}

/// Pointer event in the list's local coordinate space.
///
/// Consumption is shared between clones so that a scroll gesture can claim
/// a drag and other handlers can see it was claimed.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Vec2,
    /// Scroll amount in pixels for [`PointerEventKind::Scroll`], zero otherwise.
    pub scroll_delta: Vec2,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Vec2) -> Self {
        Self {
            id: 0,
            kind,
            position,
            scroll_delta: Vec2::ZERO,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn down(position: Vec2) -> Self {
        Self::new(PointerEventKind::Down, position)
    }

    pub fn moved(position: Vec2) -> Self {
        Self::new(PointerEventKind::Move, position)
    }

    pub fn up(position: Vec2) -> Self {
        Self::new(PointerEventKind::Up, position)
    }

    pub fn wheel(position: Vec2, delta: Vec2) -> Self {
        Self {
            scroll_delta: delta,
            ..Self::new(PointerEventKind::Scroll, position)
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
