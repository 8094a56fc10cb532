//! Centralized rendering options with TOML preset support.
//!
//! All tweakable settings (output, timing, camera, style, colors, comparison
//! panel) are consolidated here. Options serialize to/from TOML so a look can
//! be stored once and reused across renders.

mod camera;
mod colors;
mod panel;
mod render;
mod style;
mod timing;

use std::path::Path;

pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use panel::PanelOptions;
pub use render::{OutputFormat, RenderOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use style::{SphereStyle, StyleOptions};
pub use timing::TimingOptions;

use crate::error::BlochError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[timing]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Output size, frame rate and container.
    pub render: RenderOptions,
    /// Phase durations.
    pub timing: TimingOptions,
    /// Viewpoint.
    pub camera: CameraOptions,
    /// Sphere decorations.
    pub style: StyleOptions,
    /// Color palette.
    #[schemars(skip)]
    pub colors: ColorOptions,
    /// Comparison panel content.
    pub panel: PanelOptions,
}

impl Options {
    /// Generate JSON Schema describing the options file.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, BlochError> {
        let content = std::fs::read_to_string(path).map_err(BlochError::Io)?;
        toml::from_str(&content)
            .map_err(|e| BlochError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), BlochError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BlochError::OptionsParse(e.to_string()))?;
        create_parent_dir(path)?;
        std::fs::write(path, content).map_err(BlochError::Io)
    }

    /// Save the JSON schema of the options file.
    pub fn save_schema(path: &Path) -> Result<(), BlochError> {
        let content = serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| BlochError::OptionsParse(e.to_string()))?;
        create_parent_dir(path)?;
        std::fs::write(path, content).map_err(BlochError::Io)
    }
}

fn create_parent_dir(path: &Path) -> Result<(), BlochError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(BlochError::Io)?;
        }
    }
    Ok(())
}
