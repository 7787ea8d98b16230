//! Animation physics for vlist.
//!
//! Currently this is the decay model that drives flings once a drag is
//! released with enough velocity.

mod fling;

pub use fling::{DecayFling, FlingInfo};
