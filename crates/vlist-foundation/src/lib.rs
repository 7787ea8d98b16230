//! Foundation for vlist: the virtualized list engine, pointer input and
//! scroll gestures

pub mod context;
pub mod gesture;
pub mod gesture_constants;
pub mod input;
pub mod lazy;
pub mod velocity_tracker;

#[cfg(test)]
mod tests;

pub use context::LayoutContext;
pub use gesture::{Scroll, ScrollGesture, ScrollPhase};
pub use input::{PointerEvent, PointerEventKind, PointerId};
pub use lazy::{List, ListConfig, ListMeasureResult, Position, ProtocolError};

pub mod prelude {
    pub use crate::context::LayoutContext;
    pub use crate::gesture::{Scroll, ScrollGesture, ScrollPhase};
    pub use crate::input::{PointerEvent, PointerEventKind};
    pub use crate::lazy::{
        BuiltItem, ItemBuilder, IterationDirection, List, ListConfig, ListMeasureResult,
        PlacedItem, Position, ProtocolError,
    };
}
