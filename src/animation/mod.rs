//! Animation system: frame state, phase timing and gate sequencing.
//!
//! A [`Sequencer`] walks a gate list and emits one [`FrameState`] per frame
//! into a [`FrameSink`]. Scripts in [`script`] compose the phases into the
//! single and comparison animations.

pub mod frame;
pub mod script;
pub mod sequencer;
pub mod timing;

pub use frame::{FrameCounter, FrameSink, FrameState};
pub use script::{run_comparison_side, run_single, zip_pad, ComparisonSide};
pub use sequencer::Sequencer;
pub use timing::PhaseTiming;
