//! Persistent scroll position.

/// Scroll position of a list, expressed relative to its first visible item.
///
/// This is the entire state that needs saving to restore a list's scroll
/// position: copy it out after layout and put it back with
/// [`List::set_position`](super::List::set_position) before the next one.
///
/// Invariants a restored value may violate (for example `first` beyond a
/// shrunken item count) are clamped during the next layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// False when the list is at its trailing edge. Stored as "before end"
    /// so that the zero value is useful: a default position on a
    /// `scroll_to_end` list starts pinned to the end.
    ///
    /// Only consulted when the list is configured with `scroll_to_end`.
    before_end: bool,
    first: usize,
    offset: i32,
}

impl Position {
    /// A position with item `first` scrolled `offset` pixels past the
    /// viewport's leading edge.
    pub const fn new(first: usize, offset: i32) -> Self {
        Self {
            before_end: true,
            first,
            offset,
        }
    }

    /// A position pinned to the trailing edge of the list.
    pub const fn pinned_to_end() -> Self {
        Self {
            before_end: false,
            first: 0,
            offset: 0,
        }
    }

    /// Index of the first visible item.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Distance in pixels from the viewport's leading edge to the leading
    /// edge of the item at [`first`](Self::first).
    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn before_end(&self) -> bool {
        self.before_end
    }

    pub(crate) fn set_first(&mut self, first: usize) {
        self.first = first;
    }

    pub(crate) fn set_offset(&mut self, offset: i32) {
        self.offset = offset;
    }

    pub(crate) fn add_offset(&mut self, delta: i32) {
        self.offset = self.offset.saturating_add(delta);
    }

    pub(crate) fn set_before_end(&mut self, before_end: bool) {
        self.before_end = before_end;
    }
}
