//! Phase sequencer: turns gate lists into frame streams.
//!
//! Each phase samples its duration at the configured frame rate and emits one
//! [`FrameState`] per sample. The sequencer itself only tracks the state
//! left behind by completed phases.

use std::sync::Arc;

use glam::{DQuat, DVec3};

use super::frame::{FrameSink, FrameState};
use super::timing::PhaseTiming;
use crate::error::BlochError;
use crate::gates::{Gate, Instruction};

/// Drives a [`FrameSink`] through fade, rotate and wait phases.
pub struct Sequencer<S: FrameSink> {
    sink: S,
    timing: PhaseTiming,
    state: FrameState,
    emitted: usize,
}

impl<S: FrameSink> Sequencer<S> {
    /// Sequencer starting from [`FrameState::initial`].
    #[must_use]
    pub fn new(sink: S, timing: PhaseTiming) -> Self {
        Self {
            sink,
            timing,
            state: FrameState::initial(),
            emitted: 0,
        }
    }

    /// State after the last completed phase.
    #[must_use]
    pub fn state(&self) -> &FrameState {
        &self.state
    }

    /// Phase timing in use.
    #[must_use]
    pub fn timing(&self) -> &PhaseTiming {
        &self.timing
    }

    /// Frames emitted so far.
    #[must_use]
    pub fn frames_emitted(&self) -> usize {
        self.emitted
    }

    /// Give back the sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn emit(&mut self, frame: &FrameState) -> Result<(), BlochError> {
        self.sink.push_frame(frame)?;
        self.emitted += 1;
        Ok(())
    }

    fn hold_frames(&mut self, count: usize) -> Result<(), BlochError> {
        let frame = self.state.clone();
        for _ in 0..count {
            self.emit(&frame)?;
        }
        Ok(())
    }

    /// Fade the inner sphere from invisible to fully visible.
    pub fn sphere_fade_in(&mut self) -> Result<(), BlochError> {
        for t in self.timing.smooth(self.timing.fade_secs) {
            let frame = self.state.with_inner_opacity(t);
            self.emit(&frame)?;
        }
        self.state.inner_opacity = 1.0;
        Ok(())
    }

    /// Fade the inner sphere out completely.
    pub fn sphere_fade_out(&mut self) -> Result<(), BlochError> {
        for t in self.timing.smooth(self.timing.fade_secs) {
            let frame = self.state.with_inner_opacity(1.0 - t);
            self.emit(&frame)?;
        }
        self.state.inner_opacity = 0.0;
        Ok(())
    }

    /// Highlight `gate` (label, axis and direction) and fade it in.
    ///
    /// Annotations must be hidden beforehand.
    pub fn fade_in(&mut self, gate: &Gate) -> Result<(), BlochError> {
        if self.state.extra_opacity != 0.0 {
            return Err(BlochError::InvalidState(
                "gate annotations are already visible",
            ));
        }
        self.state.label = Some(Arc::from(gate.label.as_str()));
        self.state.axis = Some(gate.axis);
        self.state.rotation = Some(gate.angle);
        for t in self.timing.smooth(self.timing.fade_secs) {
            let frame = self.state.with_extra_opacity(t);
            self.emit(&frame)?;
        }
        self.state.extra_opacity = 1.0;
        Ok(())
    }

    /// Fade the current annotations out.
    ///
    /// Annotations must be fully visible beforehand.
    pub fn fade_out(&mut self) -> Result<(), BlochError> {
        if self.state.extra_opacity != 1.0 {
            return Err(BlochError::InvalidState(
                "gate annotations are not fully visible",
            ));
        }
        for t in self.timing.smooth(self.timing.fade_secs) {
            let frame = self.state.with_extra_opacity(1.0 - t);
            self.emit(&frame)?;
        }
        self.state.extra_opacity = 0.0;
        Ok(())
    }

    /// Rotate the inner sphere about the highlighted axis.
    pub fn rotate(&mut self, radians: f64) -> Result<(), BlochError> {
        let axis = self.state.axis.ok_or(BlochError::InvalidState(
            "no rotation axis is highlighted",
        ))?;
        let start = self.state.orientation;
        for t in self.timing.smooth(self.timing.rotate_secs) {
            let frame = self
                .state
                .with_orientation(turn(axis, radians * t) * start);
            self.emit(&frame)?;
        }
        self.state.orientation = (turn(axis, radians) * start).normalize();
        Ok(())
    }

    /// Hold the current state for the configured wait.
    pub fn wait(&mut self) -> Result<(), BlochError> {
        self.hold_frames(self.timing.wait_frames())
    }

    /// Hold the current state for `secs`.
    pub fn hold(&mut self, secs: f64) -> Result<(), BlochError> {
        self.hold_frames(self.timing.frame_count(secs))
    }

    /// Hold for exactly as long as a gate animation.
    pub fn identity(&mut self) -> Result<(), BlochError> {
        self.hold_frames(self.timing.gate_frames())
    }

    /// Animate one gate: highlight, rotate, un-highlight.
    pub fn apply_gate(&mut self, gate: &Gate) -> Result<(), BlochError> {
        log::debug!(
            "gate {} about {} by {:.4} rad",
            gate.label,
            gate.axis,
            gate.angle
        );
        self.fade_in(gate)?;
        self.rotate(gate.angle)?;
        self.fade_out()
    }

    /// Hold for exactly as many frames as `instruction` would produce.
    pub fn idle_like(
        &mut self,
        instruction: &Instruction,
    ) -> Result<(), BlochError> {
        let frames = match instruction {
            Instruction::Gate(_) | Instruction::Identity => {
                self.timing.gate_frames()
            }
            Instruction::Wait => self.timing.wait_frames(),
            Instruction::NoWait => 0,
        };
        self.hold_frames(frames)
    }

    /// Run a gate list in order.
    ///
    /// A trailing wait follows unless `final_wait` is false or the list
    /// contains `no_wait`.
    pub fn apply(
        &mut self,
        instructions: &[Instruction],
        final_wait: bool,
    ) -> Result<(), BlochError> {
        let mut no_wait = false;
        for instruction in instructions {
            match instruction {
                Instruction::Gate(gate) => self.apply_gate(gate)?,
                Instruction::Identity => self.identity()?,
                Instruction::Wait => self.wait()?,
                Instruction::NoWait => no_wait = true,
            }
        }
        if final_wait && !no_wait {
            self.wait()?;
        }
        Ok(())
    }
}

fn turn(axis: DVec3, radians: f64) -> DQuat {
    DQuat::from_axis_angle(axis, radians)
}
