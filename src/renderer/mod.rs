//! Frame rendering: Bloch spheres, comparison panels and whole frames.
//!
//! Everything here builds [`crate::svg`] drawings from
//! [`crate::animation::FrameState`]s; nothing is rasterized.

mod frame;
/// Projected ring and arrow geometry.
pub mod geometry;
/// Math markup to styled text.
pub mod markup;
mod panel;
mod sphere;

pub use frame::{ComparisonRenderer, FrameRenderer};
pub use panel::{circuit_symbols, derive_equation, Panel};
pub use sphere::SphereRenderer;
