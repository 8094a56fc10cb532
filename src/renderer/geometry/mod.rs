//! Projected sphere geometry: ring sectors and arrows.

/// Arrow heads and the rotation indicator.
pub mod arrow;
/// Rings split into depth-sorted sectors.
pub mod band;

pub use arrow::{arrow_head, rotation_indicator, Indicator};
pub use band::{Plane, Ring, RingSector};
