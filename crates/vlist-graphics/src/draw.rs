//! Replayable draw recording.
//!
//! Content is recorded into a [`DrawRecorder`] and frozen into a
//! [`DrawHandle`], which can be replayed any number of times onto a
//! [`Canvas`] under a different clip and translation.

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::{Color, Point, Rect};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect { rect: Rect, color: Color },
    PushClip(Rect),
    PopClip,
    PushOffset(Point),
    PopOffset,
    Replay(DrawHandle),
    HitRegion(Rect),
}

/// Immutable, cheaply clonable recording of draw operations.
#[derive(Clone, Default, PartialEq)]
pub struct DrawHandle {
    ops: Rc<[DrawOp]>,
}

impl DrawHandle {
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl fmt::Debug for DrawHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawHandle")
            .field("ops", &self.ops.len())
            .finish()
    }
}

/// The drawing backend the list emits into.
///
/// Clip and offset pushes nest; every push is matched by a pop.
pub trait Canvas {
    fn push_clip(&mut self, rect: Rect);
    fn pop_clip(&mut self);
    fn push_offset(&mut self, offset: Point);
    fn pop_offset(&mut self);
    /// Replays a previously recorded handle under the current clip and offset.
    fn replay(&mut self, handle: &DrawHandle);
    /// Declares an input hit region in the current coordinate space.
    fn hit_region(&mut self, rect: Rect);
}

/// Records draw operations for later replay.
#[derive(Debug, Default)]
pub struct DrawRecorder {
    ops: Vec<DrawOp>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Freezes the recorded operations into a handle and empties the recorder.
    pub fn finish(&mut self) -> DrawHandle {
        DrawHandle {
            ops: std::mem::take(&mut self.ops).into(),
        }
    }
}

impl Canvas for DrawRecorder {
    fn push_clip(&mut self, rect: Rect) {
        self.ops.push(DrawOp::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.ops.push(DrawOp::PopClip);
    }

    fn push_offset(&mut self, offset: Point) {
        self.ops.push(DrawOp::PushOffset(offset));
    }

    fn pop_offset(&mut self) {
        self.ops.push(DrawOp::PopOffset);
    }

    fn replay(&mut self, handle: &DrawHandle) {
        self.ops.push(DrawOp::Replay(handle.clone()));
    }

    fn hit_region(&mut self, rect: Rect) {
        self.ops.push(DrawOp::HitRegion(rect));
    }
}

/// A filled rectangle resolved to absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintedRect {
    pub rect: Rect,
    /// Effective clip in absolute coordinates; `None` when unclipped.
    pub clip: Option<Rect>,
    pub color: Color,
}

impl PaintedRect {
    /// The part of the rectangle that is actually visible.
    pub fn visible(&self) -> Rect {
        match self.clip {
            Some(clip) => self.rect.intersect(&clip),
            None => self.rect,
        }
    }
}

/// Canvas that resolves nested clips, offsets and replays into absolute rectangles.
#[derive(Debug, Default)]
pub struct Painter {
    offsets: SmallVec<[Point; 8]>,
    clips: SmallVec<[Rect; 8]>,
    painted: Vec<PaintedRect>,
    hit_regions: Vec<Rect>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn painted(&self) -> &[PaintedRect] {
        &self.painted
    }

    pub fn hit_regions(&self) -> &[Rect] {
        &self.hit_regions
    }

    pub fn clear(&mut self) {
        self.offsets.clear();
        self.clips.clear();
        self.painted.clear();
        self.hit_regions.clear();
    }

    fn origin(&self) -> Point {
        self.offsets.last().copied().unwrap_or(Point::ZERO)
    }

    fn apply(&mut self, op: &DrawOp) {
        match op {
            DrawOp::FillRect { rect, color } => {
                let rect = rect.translate(self.origin());
                self.painted.push(PaintedRect {
                    rect,
                    clip: self.clips.last().copied(),
                    color: *color,
                });
            }
            DrawOp::PushClip(rect) => self.push_clip(*rect),
            DrawOp::PopClip => self.pop_clip(),
            DrawOp::PushOffset(offset) => self.push_offset(*offset),
            DrawOp::PopOffset => self.pop_offset(),
            DrawOp::Replay(handle) => self.replay(handle),
            DrawOp::HitRegion(rect) => self.hit_region(*rect),
        }
    }
}

impl Canvas for Painter {
    fn push_clip(&mut self, rect: Rect) {
        let rect = rect.translate(self.origin());
        let clip = match self.clips.last() {
            Some(outer) => outer.intersect(&rect),
            None => rect,
        };
        self.clips.push(clip);
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }

    fn push_offset(&mut self, offset: Point) {
        let origin = self.origin() + offset;
        self.offsets.push(origin);
    }

    fn pop_offset(&mut self) {
        self.offsets.pop();
    }

    fn replay(&mut self, handle: &DrawHandle) {
        for op in handle.ops() {
            self.apply(op);
        }
    }

    fn hit_region(&mut self, rect: Rect) {
        let rect = rect.translate(self.origin());
        self.hit_regions.push(rect);
    }
}
