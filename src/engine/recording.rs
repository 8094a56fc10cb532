//! Frame-state recordings, without rendering.

use super::BlochEngine;
use crate::animation::{
    run_comparison_side, run_single, zip_pad, ComparisonSide, FrameState,
    Sequencer,
};
use crate::error::BlochError;
use crate::gates::Instruction;

impl BlochEngine {
    /// Every frame of the single animation of `instructions`.
    pub fn record_single(
        &self,
        instructions: &[Instruction],
    ) -> Result<Vec<FrameState>, BlochError> {
        let mut sequencer = Sequencer::new(Vec::new(), self.timing()?);
        run_single(&mut sequencer, instructions)?;
        Ok(sequencer.into_sink())
    }

    /// Frame pairs of a comparison of `first` (left) against `second`
    /// (right). The left side animates first.
    pub fn record_comparison(
        &self,
        first: &[Instruction],
        second: &[Instruction],
    ) -> Result<Vec<(FrameState, FrameState)>, BlochError> {
        let timing = self.timing()?;
        let mut left = Sequencer::new(Vec::new(), timing.clone());
        run_comparison_side(&mut left, first, second, ComparisonSide::First)?;
        let mut right = Sequencer::new(Vec::new(), timing);
        run_comparison_side(&mut right, second, first, ComparisonSide::Second)?;
        let (left, right) = (left.into_sink(), right.into_sink());
        if left.len() != right.len() {
            log::warn!(
                "comparison sides differ in length ({} vs {}), padding",
                left.len(),
                right.len()
            );
        }
        Ok(zip_pad(&left, &right))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use glam::DVec3;

    use super::*;
    use crate::gates::parse_gate_list;
    use crate::options::Options;

    fn engine() -> BlochEngine {
        BlochEngine::new(Options::default())
    }

    #[test]
    fn single_gate_then_wait() {
        let frames = engine()
            .record_single(&parse_gate_list(&["h"]).unwrap())
            .unwrap();
        // 8 + 40 + 8 gate frames and a 20 frame trailing wait.
        assert_eq!(frames.len(), 76);
        let last = frames.last().unwrap();
        let pole = last.orientation * DVec3::Z;
        assert!((pole - DVec3::X).length() < 1e-9);
        assert_eq!(last.extra_opacity, 0.0);
    }

    #[test]
    fn no_wait_drops_trailing_hold() {
        let frames = engine()
            .record_single(&parse_gate_list(&["x", "no_wait"]).unwrap())
            .unwrap();
        assert_eq!(frames.len(), 56);
    }

    #[test]
    fn comparison_sides_stay_in_step() {
        let engine = engine();
        let pairs = engine
            .record_comparison(
                &parse_gate_list(&["h,z,h"]).unwrap(),
                &parse_gate_list(&["x"]).unwrap(),
            )
            .unwrap();
        // Fade in, 3 gates, wait, 1 gate, wait, wait, fade out, wait.
        assert_eq!(pairs.len(), 8 + 3 * 56 + 20 + 56 + 20 + 20 + 8 + 20);
        let (left, right) = pairs.last().unwrap();
        assert_eq!(left.inner_opacity, 0.0);
        assert_eq!(right.inner_opacity, 0.0);
        // HZH and X end in the same place.
        let a = left.orientation * DVec3::Z;
        let b = right.orientation * DVec3::Z;
        assert!((a - b).length() < 1e-9);
        assert!((a + DVec3::Z).length() < 1e-9);
    }

    #[test]
    fn left_animates_while_right_idles() {
        let pairs = engine()
            .record_comparison(
                &parse_gate_list(&["z"]).unwrap(),
                &parse_gate_list(&["s,s"]).unwrap(),
            )
            .unwrap();
        let (left, right) = &pairs[8 + 30];
        assert!(left.rotation.is_some_and(|r| (r - PI).abs() < 1e-12));
        assert!(right.label.is_none());
    }

    #[test]
    fn invalid_frame_rate_is_rejected() {
        let mut options = Options::default();
        options.render.fps = 0.0;
        let engine = BlochEngine::new(options);
        assert!(engine.record_single(&[]).is_err());
    }
}
