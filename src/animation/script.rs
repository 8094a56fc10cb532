//! Canned phase scripts for single and side-by-side animations.

use super::frame::FrameSink;
use super::sequencer::Sequencer;
use crate::error::BlochError;
use crate::gates::Instruction;

/// Which half of a comparison animates its gates first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonSide {
    /// Animates first, then idles through the other side's gates.
    First,
    /// Idles through the other side's gates, then animates.
    Second,
}

/// Single-sequence script: every gate in order, then a trailing wait.
pub fn run_single<S: FrameSink>(
    sequencer: &mut Sequencer<S>,
    gates: &[Instruction],
) -> Result<(), BlochError> {
    sequencer.apply(gates, true)
}

/// One half of a comparison.
///
/// The sphere fades in, the two gate lists take turns (this side idles for
/// exactly the length of the other side's instructions), then the sphere
/// fades out. Both halves therefore emit the same number of frames.
pub fn run_comparison_side<S: FrameSink>(
    sequencer: &mut Sequencer<S>,
    own: &[Instruction],
    other: &[Instruction],
    side: ComparisonSide,
) -> Result<(), BlochError> {
    sequencer.sphere_fade_in()?;
    if side == ComparisonSide::First {
        sequencer.apply(own, false)?;
        sequencer.wait()?;
    }
    for instruction in other {
        sequencer.idle_like(instruction)?;
    }
    sequencer.wait()?;
    if side == ComparisonSide::Second {
        sequencer.apply(own, false)?;
        sequencer.wait()?;
    }
    sequencer.wait()?;
    sequencer.sphere_fade_out()?;
    sequencer.wait()
}

/// Pair two frame streams, padding the shorter with its last frame (or the
/// default value when it is empty).
#[must_use]
pub fn zip_pad<T: Clone + Default>(left: &[T], right: &[T]) -> Vec<(T, T)> {
    let len = left.len().max(right.len());
    (0..len)
        .map(|i| (padded(left, i), padded(right, i)))
        .collect()
}

fn padded<T: Clone + Default>(items: &[T], index: usize) -> T {
    items
        .get(index)
        .or_else(|| items.last())
        .cloned()
        .unwrap_or_default()
}
