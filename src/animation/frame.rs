//! Per-frame animation state and the sink frames are emitted into.

use std::sync::Arc;

use glam::{DQuat, DVec3};

use crate::error::BlochError;

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    /// Accumulated rotation of the inner sphere.
    pub orientation: DQuat,
    /// Opacity of the inner sphere group.
    pub inner_opacity: f64,
    /// Opacity of the gate annotations (label, axis, indicator).
    pub extra_opacity: f64,
    /// Caption of the highlighted gate.
    pub label: Option<Arc<str>>,
    /// Unit axis of the highlighted gate.
    pub axis: Option<DVec3>,
    /// Signed angle of the highlighted gate, for the direction indicator.
    pub rotation: Option<f64>,
}

impl FrameState {
    /// State before any gate: no rotation, sphere visible, nothing
    /// highlighted.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            orientation: DQuat::IDENTITY,
            inner_opacity: 1.0,
            extra_opacity: 0.0,
            label: None,
            axis: None,
            rotation: None,
        }
    }

    /// Copy of this state with a different inner orientation.
    #[must_use]
    pub fn with_orientation(&self, orientation: DQuat) -> Self {
        Self {
            orientation,
            ..self.clone()
        }
    }

    /// Copy of this state with a different inner opacity.
    #[must_use]
    pub fn with_inner_opacity(&self, inner_opacity: f64) -> Self {
        Self {
            inner_opacity,
            ..self.clone()
        }
    }

    /// Copy of this state with a different annotation opacity.
    #[must_use]
    pub fn with_extra_opacity(&self, extra_opacity: f64) -> Self {
        Self {
            extra_opacity,
            ..self.clone()
        }
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Receives frames from the sequencer in order.
pub trait FrameSink {
    /// Consume one frame.
    fn push_frame(&mut self, frame: &FrameState) -> Result<(), BlochError>;
}

/// Recording sink.
impl FrameSink for Vec<FrameState> {
    fn push_frame(&mut self, frame: &FrameState) -> Result<(), BlochError> {
        self.push(frame.clone());
        Ok(())
    }
}

/// Counting sink, for sizing an animation without keeping it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameCounter {
    /// Frames seen so far.
    pub count: usize,
}

impl FrameSink for FrameCounter {
    fn push_frame(&mut self, _frame: &FrameState) -> Result<(), BlochError> {
        self.count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_shows_sphere_without_annotations() {
        let state = FrameState::default();
        assert_eq!(state.inner_opacity, 1.0);
        assert_eq!(state.extra_opacity, 0.0);
        assert!(state.label.is_none());
        assert!(state.axis.is_none());
        assert_eq!(state.orientation, DQuat::IDENTITY);
    }

    #[test]
    fn builders_change_one_field() {
        let base = FrameState::initial();
        let faded = base.with_inner_opacity(0.25);
        assert_eq!(faded.inner_opacity, 0.25);
        assert_eq!(faded.extra_opacity, base.extra_opacity);
        let shown = base.with_extra_opacity(1.0);
        assert_eq!(shown.extra_opacity, 1.0);
        assert_eq!(shown.inner_opacity, 1.0);
    }

    #[test]
    fn vec_sink_records_frames() {
        let mut frames: Vec<FrameState> = Vec::new();
        frames.push_frame(&FrameState::initial()).unwrap();
        frames
            .push_frame(&FrameState::initial().with_inner_opacity(0.0))
            .unwrap();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1].inner_opacity, 0.0);
    }
}
