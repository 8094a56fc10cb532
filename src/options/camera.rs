use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Fixed viewpoint the sphere is projected from.
pub struct CameraOptions {
    /// Rotation about the vertical axis in degrees. Positive swings the X
    /// axis to the left.
    #[schemars(title = "Spin", range(min = -90.0, max = 90.0), extend("step" = 0.5))]
    pub spin_deg: f64,
    /// Downward viewing tilt in degrees.
    #[schemars(title = "Tilt", range(min = -90.0, max = 90.0), extend("step" = 0.5))]
    pub tilt_deg: f64,
    /// Field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 120.0), extend("step" = 0.5))]
    pub fov_deg: f64,
    /// Width of the scene, in sphere units, that fills the field of view.
    #[schemars(skip)]
    pub view_size: f64,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            // A hair over 1/32 turn so no band edge sits exactly edge-on.
            spin_deg: 11.25 * 1.001,
            tilt_deg: 22.5,
            fov_deg: 22.5,
            view_size: 4.0,
        }
    }
}
