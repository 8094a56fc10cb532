//! Frame encoders: animated GIF, MP4 through `ffmpeg`, and SVG frame
//! directories.
//!
//! Encoders receive finished [`Drawing`]s one at a time, so a whole
//! animation never has to be held in memory.

mod gif;
mod raster;
mod svg;
mod video;

use std::path::{Path, PathBuf};

pub use self::gif::{frame_delay, GifEncoder};
pub use self::raster::{Rasterizer, RgbaImage};
pub use self::svg::SvgDirEncoder;
pub use self::video::{EncodeConfig, FfmpegEncoder};
use crate::error::BlochError;
use crate::options::OutputFormat;
use crate::svg::Drawing;

/// Sink for rendered frames.
pub trait FrameEncoder {
    /// Append one frame.
    fn encode(&mut self, drawing: &Drawing) -> Result<(), BlochError>;

    /// Frames appended so far.
    fn frames(&self) -> usize;

    /// Flush everything and return the written path.
    fn finish(self: Box<Self>) -> Result<PathBuf, BlochError>;
}

/// Where an animation called `name` is written: `<name>.gif`,
/// `<name>.mp4`, or the directory `<name>/`.
#[must_use]
pub fn output_path(name: &str, format: OutputFormat) -> PathBuf {
    match format.extension() {
        Some(ext) => PathBuf::from(format!("{name}.{ext}")),
        None => PathBuf::from(name),
    }
}

/// Encoder for `format` writing to `path`.
pub fn open_encoder(
    format: OutputFormat,
    path: &Path,
    fps: f64,
) -> Result<Box<dyn FrameEncoder>, BlochError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    log::debug!("opening {format:?} encoder at {}", path.display());
    Ok(match format {
        OutputFormat::Gif => Box::new(GifEncoder::new(path, fps)),
        OutputFormat::Mp4 => {
            Box::new(FfmpegEncoder::new(EncodeConfig::mp4(path, fps)))
        }
        OutputFormat::Svg => Box::new(SvgDirEncoder::new(path)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_paths_per_format() {
        assert_eq!(
            output_path("hzh", OutputFormat::Gif),
            PathBuf::from("hzh.gif")
        );
        assert_eq!(
            output_path("out/hzh", OutputFormat::Mp4),
            PathBuf::from("out/hzh.mp4")
        );
        assert_eq!(output_path("hzh", OutputFormat::Svg), PathBuf::from("hzh"));
    }

    #[test]
    fn svg_encoder_creates_its_directory() {
        let dir = std::env::temp_dir().join("bloch_open_encoder_test");
        let _ = std::fs::remove_dir_all(&dir);
        let encoder = open_encoder(OutputFormat::Svg, &dir, 20.0).unwrap();
        assert_eq!(encoder.frames(), 0);
        assert!(dir.is_dir());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
