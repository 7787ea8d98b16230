//! Built items and the builder that produces them.

use vlist_graphics::{DrawHandle, DrawRecorder, Size};
use vlist_layout::Constraints;

/// An item built for the current frame.
///
/// Items are not cached: an item is rebuilt every frame it is needed.
#[derive(Clone, Debug)]
pub struct BuiltItem {
    pub size: Size,
    pub handle: DrawHandle,
}

impl BuiltItem {
    pub fn new(size: Size, handle: DrawHandle) -> Self {
        Self { size, handle }
    }
}

/// Builds the item at an index.
///
/// `constraints` leave the main axis unbounded and pass the viewport's
/// cross-axis bounds through. The builder records its content into
/// `recorder` and returns the size it occupies. It must behave as a pure
/// function of `index` within a frame; indices may be requested in either
/// direction.
pub trait ItemBuilder {
    fn build(&mut self, index: usize, constraints: Constraints, recorder: &mut DrawRecorder)
        -> Size;
}

impl<F> ItemBuilder for F
where
    F: FnMut(usize, Constraints, &mut DrawRecorder) -> Size,
{
    fn build(
        &mut self,
        index: usize,
        constraints: Constraints,
        recorder: &mut DrawRecorder,
    ) -> Size {
        self(index, constraints, recorder)
    }
}
