//! Virtualized list layout.
//!
//! A [`List`] keeps a [`Position`] across frames and, each frame, builds only
//! the items needed to cover its viewport:
//! - [`decide_direction`] - whether another item is needed, and on which side
//! - [`ItemBuilder`] - produces the size and content of an item by index
//! - [`ListMeasureResult`] - what was placed, and whether the list is at an edge
//!
//! Items are requested one at a time, forward from the end of the window or
//! backward from its start, so the window always holds a contiguous range of
//! indices. Once the viewport is covered, items that ended up fully outside
//! it are trimmed and the rest are drawn clipped to the viewport.
//!
//! # Example
//!
//! ```rust,ignore
//! use vlist_foundation::lazy::{List, ListConfig};
//!
//! let mut list = List::new(ListConfig::vertical());
//! let result = list.layout(&ctx, &mut painter, messages.len(), |index, cs, recorder| {
//!     draw_message(&messages[index], cs, recorder)
//! })?;
//! saved_position = list.position();
//! ```

mod error;
mod finalizer;
mod item;
mod iteration;
mod list;
mod position;

pub use error::ProtocolError;
pub use finalizer::{ListMeasureResult, PlacedItem};
pub use item::{BuiltItem, ItemBuilder};
pub use iteration::{decide_direction, FillState, IterationDirection};
pub use list::{List, ListConfig, MAX_ITEMS_PER_FRAME};
pub use position::Position;
