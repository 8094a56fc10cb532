use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use gif::{Encoder, Frame, Repeat};

use super::raster::Rasterizer;
use super::FrameEncoder;
use crate::error::BlochError;
use crate::svg::Drawing;

/// Palette quantization speed, 1 (best) to 30 (fastest).
const QUANTIZE_SPEED: i32 = 10;

/// Per-frame delay in hundredths of a second.
#[must_use]
pub fn frame_delay(fps: f64) -> u16 {
    if fps <= 0.0 || !fps.is_finite() {
        return 0;
    }
    (100.0 / fps).round().clamp(0.0, f64::from(u16::MAX)) as u16
}

/// Looping animated GIF written frame by frame.
pub struct GifEncoder {
    path: PathBuf,
    delay: u16,
    rasterizer: Rasterizer,
    encoder: Option<Encoder<BufWriter<File>>>,
    size: (u16, u16),
    frames: usize,
}

impl std::fmt::Debug for GifEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GifEncoder")
            .field("path", &self.path)
            .field("delay", &self.delay)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl GifEncoder {
    /// Encoder writing to `path`. The file is created with the first frame.
    #[must_use]
    pub fn new(path: &Path, fps: f64) -> Self {
        Self {
            path: path.to_path_buf(),
            delay: frame_delay(fps),
            rasterizer: Rasterizer::new(),
            encoder: None,
            size: (0, 0),
            frames: 0,
        }
    }

    fn open(&mut self, width: u16, height: u16) -> Result<(), BlochError> {
        let file = BufWriter::new(File::create(&self.path)?);
        let mut encoder = Encoder::new(file, width, height, &[])
            .map_err(|e| BlochError::Encode(e.to_string()))?;
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| BlochError::Encode(e.to_string()))?;
        self.encoder = Some(encoder);
        self.size = (width, height);
        Ok(())
    }
}

fn dimension(value: u32) -> Result<u16, BlochError> {
    u16::try_from(value).map_err(|_| {
        BlochError::Encode(format!("frame dimension {value} exceeds GIF limit"))
    })
}

impl FrameEncoder for GifEncoder {
    fn encode(&mut self, drawing: &Drawing) -> Result<(), BlochError> {
        let mut image = self.rasterizer.rasterize(drawing)?;
        let width = dimension(image.width)?;
        let height = dimension(image.height)?;
        if self.encoder.is_none() {
            self.open(width, height)?;
        } else if self.size != (width, height) {
            return Err(BlochError::Encode(format!(
                "frame size {width}x{height} differs from {}x{}",
                self.size.0, self.size.1
            )));
        }
        let mut frame = Frame::from_rgba_speed(
            width,
            height,
            &mut image.pixels,
            QUANTIZE_SPEED,
        );
        frame.delay = self.delay;
        if let Some(encoder) = self.encoder.as_mut() {
            encoder
                .write_frame(&frame)
                .map_err(|e| BlochError::Encode(e.to_string()))?;
        }
        self.frames += 1;
        Ok(())
    }

    fn frames(&self) -> usize {
        self.frames
    }

    fn finish(self: Box<Self>) -> Result<PathBuf, BlochError> {
        let Some(encoder) = self.encoder else {
            return Err(BlochError::Encode("no frames to encode".to_owned()));
        };
        let mut file = encoder
            .into_inner()
            .map_err(|e| BlochError::Encode(e.to_string()))?;
        file.flush()?;
        log::info!(
            "wrote {} frames to {}",
            self.frames,
            self.path.display()
        );
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::svg::Rect;

    #[test]
    fn delay_in_centiseconds() {
        assert_eq!(frame_delay(20.0), 5);
        assert_eq!(frame_delay(30.0), 3);
        assert_eq!(frame_delay(0.0), 0);
    }

    #[test]
    fn writes_a_looping_gif() {
        let dir = std::env::temp_dir().join("bloch_gif_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("square.gif");
        let mut encoder: Box<dyn FrameEncoder> =
            Box::new(GifEncoder::new(&path, 20.0));
        for fill in ["#f00", "#00f"] {
            let mut drawing = Drawing::centered(1.0, 1.0, 8)
                .with_background(Some("white".to_owned()));
            drawing.append(
                Rect::new(DVec2::splat(-0.25), DVec2::splat(0.5), fill),
                0.0,
            );
            encoder.encode(&drawing).unwrap();
        }
        assert_eq!(encoder.frames(), 2);
        let written = encoder.finish().unwrap();
        let bytes = std::fs::read(&written).unwrap();
        assert!(bytes.starts_with(b"GIF89a"));
        assert_eq!(bytes.last(), Some(&0x3b));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_animation_is_an_error() {
        let path = std::env::temp_dir().join("bloch_never_written.gif");
        let encoder: Box<dyn FrameEncoder> =
            Box::new(GifEncoder::new(&path, 20.0));
        assert!(matches!(encoder.finish(), Err(BlochError::Encode(_))));
    }
}
