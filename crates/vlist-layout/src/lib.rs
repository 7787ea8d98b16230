//! Layout contracts for vlist: axes, constraints and cross-axis alignment

mod alignment;
mod axis;
mod constraints;

pub use alignment::*;
pub use axis::*;
pub use constraints::*;

pub mod prelude {
    pub use crate::alignment::Alignment;
    pub use crate::axis::Axis;
    pub use crate::constraints::Constraints;
}
