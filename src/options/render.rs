use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Container format for exported animations.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[cfg_attr(feature = "binary", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Looping animated GIF.
    #[default]
    Gif,
    /// H.264 video encoded by an external `ffmpeg`.
    Mp4,
    /// Directory of numbered SVG frames.
    Svg,
}

impl OutputFormat {
    /// File extension for single-file formats, `None` for frame directories.
    #[must_use]
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Gif => Some("gif"),
            Self::Mp4 => Some("mp4"),
            Self::Svg => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Render", inline)]
#[serde(default)]
/// Output size, frame rate and container.
pub struct RenderOptions {
    /// Pixel width of a single-sphere frame. Comparison frames are twice as
    /// wide.
    #[schemars(title = "Width", range(min = 64, max = 4096))]
    pub width: u32,
    /// Frames per second.
    #[schemars(title = "Frame Rate", range(min = 1.0, max = 120.0))]
    pub fps: f64,
    /// Background fill; `None` leaves frames transparent.
    #[schemars(title = "Background")]
    pub background: Option<String>,
    /// Export container.
    #[schemars(title = "Format")]
    pub format: OutputFormat,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 624,
            fps: 20.0,
            background: Some("white".to_owned()),
            format: OutputFormat::Gif,
        }
    }
}
