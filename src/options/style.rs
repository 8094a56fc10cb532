use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the inner (rotating) sphere is drawn.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[cfg_attr(feature = "binary", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum SphereStyle {
    /// Three colored bands plus axis arrows.
    #[default]
    Bands,
    /// Axis arrows and a bold Bloch vector, no bands.
    Arrows,
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Style", inline)]
#[serde(default)]
/// Optional decorations of the sphere frame.
pub struct StyleOptions {
    /// Inner sphere representation.
    #[schemars(title = "Sphere Style")]
    pub sphere: SphereStyle,
    /// Draw `|0⟩` and `|1⟩` next to the outer poles.
    #[schemars(title = "Ket Labels")]
    pub ket_labels: bool,
    /// Draw `|0⟩` and `|1⟩` on the inner poles, rotating with the sphere.
    #[schemars(title = "Inner Ket Labels")]
    pub inner_ket_labels: bool,
    /// Draw latitude lines on the inner sphere.
    #[schemars(title = "Elevation Lines")]
    pub elevation_lines: bool,
    /// Draw a curved arrow at the highlighted axis showing rotation sense.
    #[schemars(title = "Rotation Indicator")]
    pub rotation_indicator: bool,
}

impl StyleOptions {
    /// Whether the inner sphere is drawn with bands.
    #[must_use]
    pub fn draws_bands(&self) -> bool {
        matches!(self.sphere, SphereStyle::Bands)
    }
}
