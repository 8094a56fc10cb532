use serde::{Deserialize, Serialize};

/// Color palette for sphere frames. Values are any SVG paint string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// Band in the XY plane (equator).
    pub equator: String,
    /// Band in the XZ plane.
    pub xz_meridian: String,
    /// Band in the YZ plane.
    pub yz_meridian: String,
    /// Axis arrows, axis letters and the comparison panel.
    pub ink: String,
    /// Highlighted rotation axis.
    pub axis_highlight: String,
    /// Gate caption.
    pub label: String,
    /// Rotation-direction indicator.
    pub rotation_indicator: String,
    /// Latitude lines on the inner sphere.
    pub elevation: String,
    /// Bloch vector in the `arrows` style.
    pub bloch_vector: String,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            equator: "#45e".to_owned(),
            xz_meridian: "#e1e144".to_owned(),
            yz_meridian: "#9e2".to_owned(),
            ink: "black".to_owned(),
            axis_highlight: "#e00".to_owned(),
            label: "#c00".to_owned(),
            rotation_indicator: "orange".to_owned(),
            elevation: "#bbb".to_owned(),
            bloch_vector: "#34b".to_owned(),
        }
    }
}
