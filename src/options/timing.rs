use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Timing", inline)]
#[serde(default)]
/// Phase durations of the gate animation, in seconds.
pub struct TimingOptions {
    /// Fade of the sphere or of the gate annotations.
    #[schemars(title = "Fade", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub fade_secs: f64,
    /// Rotation of the inner sphere for one gate.
    #[schemars(title = "Rotate", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub rotate_secs: f64,
    /// Plain pause (`wait` token and the trailing pause).
    #[schemars(title = "Wait", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub wait_secs: f64,
    /// Playback speed multiplier; every duration is divided by it.
    #[schemars(title = "Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub speed: f64,
    /// Curve applied to fades and rotations.
    #[schemars(skip)]
    pub easing: EasingFunction,
}

impl Default for TimingOptions {
    fn default() -> Self {
        Self {
            fade_secs: 0.4,
            rotate_secs: 2.0,
            wait_secs: 1.0,
            speed: 1.0,
            easing: EasingFunction::DEFAULT,
        }
    }
}
