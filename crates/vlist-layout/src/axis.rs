use vlist_graphics::{Point, Size, Vec2};

use crate::Constraints;

/// Scroll direction of a list.
///
/// The main axis is the one items are stacked along; the cross axis is
/// perpendicular to it. All helpers below convert between (main, cross)
/// pairs and plain x/y geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Main axis: left to right. Cross axis: top to bottom.
    Horizontal,

    /// Main axis: top to bottom. Cross axis: left to right.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }

    /// Builds a point from main and cross coordinates.
    #[inline]
    pub fn point(self, main: i32, cross: i32) -> Point {
        match self {
            Axis::Horizontal => Point::new(main, cross),
            Axis::Vertical => Point::new(cross, main),
        }
    }

    /// Builds a size from main and cross extents.
    #[inline]
    pub fn size(self, main: i32, cross: i32) -> Size {
        match self {
            Axis::Horizontal => Size::new(main, cross),
            Axis::Vertical => Size::new(cross, main),
        }
    }

    #[inline]
    pub fn main(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.width,
            Axis::Vertical => size.height,
        }
    }

    #[inline]
    pub fn cross(self, size: Size) -> i32 {
        match self {
            Axis::Horizontal => size.height,
            Axis::Vertical => size.width,
        }
    }

    /// Main-axis component of a fractional vector, e.g. a pointer position.
    #[inline]
    pub fn main_f32(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// Returns `(min, max)` of the main-axis constraint.
    pub fn main_constraint(self, cs: &Constraints) -> (i32, i32) {
        match self {
            Axis::Horizontal => (cs.min_width, cs.max_width),
            Axis::Vertical => (cs.min_height, cs.max_height),
        }
    }

    /// Returns `(min, max)` of the cross-axis constraint.
    pub fn cross_constraint(self, cs: &Constraints) -> (i32, i32) {
        match self {
            Axis::Horizontal => (cs.min_height, cs.max_height),
            Axis::Vertical => (cs.min_width, cs.max_width),
        }
    }

    /// Builds constraints from main and cross bounds.
    pub fn constraints(
        self,
        main_min: i32,
        main_max: i32,
        cross_min: i32,
        cross_max: i32,
    ) -> Constraints {
        match self {
            Axis::Horizontal => Constraints {
                min_width: main_min,
                max_width: main_max,
                min_height: cross_min,
                max_height: cross_max,
            },
            Axis::Vertical => Constraints {
                min_width: cross_min,
                max_width: cross_max,
                min_height: main_min,
                max_height: main_max,
            },
        }
    }
}
