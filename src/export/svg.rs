use std::path::{Path, PathBuf};

use super::FrameEncoder;
use crate::error::BlochError;
use crate::svg::Drawing;

/// Writes each frame as `frame_00000.svg`, `frame_00001.svg`, … into a
/// directory.
#[derive(Debug)]
pub struct SvgDirEncoder {
    dir: PathBuf,
    frames: usize,
}

impl SvgDirEncoder {
    /// Create (or reuse) `dir`.
    pub fn new(dir: &Path) -> Result<Self, BlochError> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
            frames: 0,
        })
    }

    /// Path of frame number `index`.
    #[must_use]
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame_{index:05}.svg"))
    }
}

impl FrameEncoder for SvgDirEncoder {
    fn encode(&mut self, drawing: &Drawing) -> Result<(), BlochError> {
        std::fs::write(self.frame_path(self.frames), drawing.to_svg())?;
        self.frames += 1;
        Ok(())
    }

    fn frames(&self) -> usize {
        self.frames
    }

    fn finish(self: Box<Self>) -> Result<PathBuf, BlochError> {
        log::info!("wrote {} frames to {}", self.frames, self.dir.display());
        Ok(self.dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_numbered() {
        let dir = std::env::temp_dir().join("bloch_svg_frames_test");
        let _ = std::fs::remove_dir_all(&dir);
        let mut encoder = SvgDirEncoder::new(&dir).unwrap();
        let drawing = Drawing::centered(1.0, 1.0, 10);
        encoder.encode(&drawing).unwrap();
        encoder.encode(&drawing).unwrap();
        assert!(dir.join("frame_00000.svg").is_file());
        assert!(dir.join("frame_00001.svg").is_file());
        let written = Box::new(encoder).finish().unwrap();
        assert_eq!(written, dir);
        let content =
            std::fs::read_to_string(dir.join("frame_00001.svg")).unwrap();
        assert!(content.starts_with("<svg"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
