//! Conversion of phase durations into frame samples.

use crate::options::TimingOptions;
use crate::util::easing::EasingFunction;

/// Frame-rate aware view of [`TimingOptions`].
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseTiming {
    /// Frames per second.
    pub fps: f64,
    /// Fade duration in seconds.
    pub fade_secs: f64,
    /// Rotation duration in seconds.
    pub rotate_secs: f64,
    /// Wait duration in seconds.
    pub wait_secs: f64,
    /// Playback speed multiplier.
    pub speed: f64,
    /// Curve applied to smooth phases.
    pub easing: EasingFunction,
}

impl PhaseTiming {
    /// Combine phase durations with a frame rate.
    #[must_use]
    pub fn new(fps: f64, options: &TimingOptions) -> Self {
        Self {
            fps,
            fade_secs: options.fade_secs,
            rotate_secs: options.rotate_secs,
            wait_secs: options.wait_secs,
            speed: options.speed,
            easing: options.easing,
        }
    }

    /// Number of frames spanning `secs`, rounded half to even.
    #[must_use]
    pub fn frame_count(&self, secs: f64) -> usize {
        let speed = if self.speed > 0.0 { self.speed } else { 1.0 };
        let frames = (self.fps * secs / speed).round_ties_even();
        if frames.is_finite() && frames > 0.0 {
            frames as usize
        } else {
            0
        }
    }

    /// Eased progress values for a smooth phase of `secs`.
    #[must_use]
    pub fn smooth(&self, secs: f64) -> Vec<f64> {
        linspace(self.frame_count(secs))
            .map(|x| self.easing.evaluate(x))
            .collect()
    }

    /// Frames one gate animation takes: fade in, rotate, fade out.
    #[must_use]
    pub fn gate_frames(&self) -> usize {
        2 * self.frame_count(self.fade_secs)
            + self.frame_count(self.rotate_secs)
    }

    /// Frames of a plain `wait`.
    #[must_use]
    pub fn wait_frames(&self) -> usize {
        self.frame_count(self.wait_secs)
    }
}

/// `n` evenly spaced values from 0 to 1, both ends included. A single
/// sample is 0.
#[must_use]
pub fn linspace(n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| if i + 1 == n && n > 1 { 1.0 } else { i as f64 * step })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timing(fps: f64) -> PhaseTiming {
        PhaseTiming::new(fps, &TimingOptions::default())
    }

    #[test]
    fn linspace_includes_both_ends() {
        let values: Vec<f64> = linspace(5).collect();
        assert_eq!(values, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn linspace_edge_counts() {
        assert_eq!(linspace(0).count(), 0);
        assert_eq!(linspace(1).collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(linspace(2).collect::<Vec<_>>(), vec![0.0, 1.0]);
    }

    #[test]
    fn default_phase_lengths_at_20_fps() {
        let t = timing(20.0);
        assert_eq!(t.frame_count(t.fade_secs), 8);
        assert_eq!(t.frame_count(t.rotate_secs), 40);
        assert_eq!(t.wait_frames(), 20);
        assert_eq!(t.gate_frames(), 56);
    }

    #[test]
    fn frame_count_rounds_half_to_even() {
        // 12.5 frames
        let t = timing(25.0);
        assert_eq!(t.frame_count(0.5), 12);
        // 13.5 frames
        let t = timing(27.0);
        assert_eq!(t.frame_count(0.5), 14);
    }

    #[test]
    fn speed_shortens_phases() {
        let mut t = timing(20.0);
        t.speed = 2.0;
        assert_eq!(t.frame_count(t.rotate_secs), 20);
        t.speed = 0.0;
        assert_eq!(t.frame_count(t.rotate_secs), 40);
    }

    #[test]
    fn smooth_phase_starts_at_zero_and_ends_at_one() {
        let samples = timing(20.0).smooth(0.4);
        assert_eq!(samples.len(), 8);
        assert!(samples[0].abs() < 1e-12);
        assert!((samples[7] - 1.0).abs() < 1e-12);
        assert!(samples.windows(2).all(|w| w[1] >= w[0]));
    }

    #[test]
    fn zero_duration_has_no_frames() {
        assert!(timing(20.0).smooth(0.0).is_empty());
    }
}
