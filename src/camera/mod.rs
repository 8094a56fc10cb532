//! Fixed viewpoint for sphere frames.
//!
//! Maps Bloch coordinates to view space and projects them with a mild
//! perspective onto the drawing plane.

/// Projector from Bloch space to the drawing plane.
pub mod core;

pub use self::core::Projector;
