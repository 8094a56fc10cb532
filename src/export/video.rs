use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use super::raster::Rasterizer;
use super::FrameEncoder;
use crate::error::BlochError;
use crate::svg::Drawing;

/// Settings passed to `ffmpeg`.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeConfig {
    /// Output file.
    pub path: PathBuf,
    /// Frames per second.
    pub fps: f64,
    /// Executable to run.
    pub program: String,
}

impl EncodeConfig {
    /// H.264 MP4 settings for `path`.
    #[must_use]
    pub fn mp4(path: &Path, fps: f64) -> Self {
        Self {
            path: path.to_path_buf(),
            fps,
            program: "ffmpeg".to_owned(),
        }
    }

    /// Arguments for raw RGBA input of the given size.
    #[must_use]
    pub fn args(&self, width: u32, height: u32) -> Vec<String> {
        let mut args: Vec<String> = [
            "-y",
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
        ]
        .iter()
        .map(|s| (*s).to_owned())
        .collect();
        args.push(format!("{width}x{height}"));
        args.push("-r".to_owned());
        args.push(self.fps.to_string());
        args.extend(
            [
                "-i",
                "-",
                "-vf",
                "pad=ceil(iw/2)*2:ceil(ih/2)*2",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
            ]
            .iter()
            .map(|s| (*s).to_owned()),
        );
        args.push(self.path.to_string_lossy().into_owned());
        args
    }
}

/// Streams rasterized frames into an external `ffmpeg` process.
pub struct FfmpegEncoder {
    config: EncodeConfig,
    rasterizer: Rasterizer,
    child: Option<(Child, ChildStdin)>,
    size: (u32, u32),
    frames: usize,
}

impl std::fmt::Debug for FfmpegEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FfmpegEncoder")
            .field("config", &self.config)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

impl FfmpegEncoder {
    /// Encoder for `config`. `ffmpeg` is started with the first frame.
    #[must_use]
    pub fn new(config: EncodeConfig) -> Self {
        Self {
            config,
            rasterizer: Rasterizer::new(),
            child: None,
            size: (0, 0),
            frames: 0,
        }
    }

    fn spawn(
        &self,
        width: u32,
        height: u32,
    ) -> Result<(Child, ChildStdin), BlochError> {
        let mut child = Command::new(&self.config.program)
            .args(self.config.args(width, height))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    BlochError::Video(format!(
                        "`{}` not found on PATH",
                        self.config.program
                    ))
                } else {
                    BlochError::Video(format!(
                        "failed to start `{}`: {e}",
                        self.config.program
                    ))
                }
            })?;
        let stdin = child.stdin.take().ok_or_else(|| {
            BlochError::Video("encoder stdin unavailable".to_owned())
        })?;
        log::debug!("started {} for {width}x{height}", self.config.program);
        Ok((child, stdin))
    }
}

impl FrameEncoder for FfmpegEncoder {
    fn encode(&mut self, drawing: &Drawing) -> Result<(), BlochError> {
        let image = self.rasterizer.rasterize(drawing)?;
        let size = (image.width, image.height);
        if self.child.is_none() {
            self.child = Some(self.spawn(image.width, image.height)?);
            self.size = size;
        } else if self.size != size {
            return Err(BlochError::Video(format!(
                "frame size {}x{} differs from {}x{}",
                size.0, size.1, self.size.0, self.size.1
            )));
        }
        if let Some((_, stdin)) = self.child.as_mut() {
            stdin.write_all(&image.pixels).map_err(|e| {
                BlochError::Video(format!("writing frame to encoder: {e}"))
            })?;
        }
        self.frames += 1;
        Ok(())
    }

    fn frames(&self) -> usize {
        self.frames
    }

    fn finish(mut self: Box<Self>) -> Result<PathBuf, BlochError> {
        let Some((mut child, stdin)) = self.child.take() else {
            return Err(BlochError::Video("no frames to encode".to_owned()));
        };
        drop(stdin);
        let status = child.wait()?;
        if !status.success() {
            return Err(BlochError::Video(format!(
                "`{}` exited with {status}",
                self.config.program
            )));
        }
        log::info!(
            "wrote {} frames to {}",
            self.frames,
            self.config.path.display()
        );
        Ok(self.config.path.clone())
    }
}

impl Drop for FfmpegEncoder {
    fn drop(&mut self) {
        let Some((mut child, stdin)) = self.child.take() else {
            return;
        };
        drop(stdin);
        match child.wait() {
            Ok(status) => log::warn!(
                "`{}` stopped early ({status}), {} may be incomplete",
                self.config.program,
                self.config.path.display()
            ),
            Err(e) => log::warn!("waiting for `{}`: {e}", self.config.program),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arguments_describe_raw_input_and_even_output() {
        let config = EncodeConfig::mp4(Path::new("out/demo.mp4"), 20.0);
        let args = config.args(624, 374);
        let joined = args.join(" ");
        assert!(joined.contains("-f rawvideo -pix_fmt rgba -s 624x374 -r 20"));
        assert!(joined.contains("-i -"));
        assert!(joined.contains("pad=ceil(iw/2)*2:ceil(ih/2)*2"));
        assert!(joined.contains("-pix_fmt yuv420p"));
        assert_eq!(args.last().map(String::as_str), Some("out/demo.mp4"));
    }

    #[test]
    fn missing_program_is_a_video_error() {
        let mut config = EncodeConfig::mp4(
            &std::env::temp_dir().join("bloch_missing.mp4"),
            20.0,
        );
        config.program = "bloch-no-such-encoder".to_owned();
        let mut encoder = FfmpegEncoder::new(config);
        let drawing = Drawing::centered(1.0, 1.0, 4);
        assert!(matches!(
            encoder.encode(&drawing),
            Err(BlochError::Video(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn abandoned_encoder_reaps_its_process() {
        let mut config = EncodeConfig::mp4(
            &std::env::temp_dir().join("bloch_abandoned.mp4"),
            20.0,
        );
        // `true` ignores its arguments and exits without reading stdin.
        config.program = "true".to_owned();
        let mut encoder = FfmpegEncoder::new(config);
        let _ = encoder.encode(&Drawing::centered(1.0, 1.0, 4));
        assert!(encoder.child.is_some());
        drop(encoder);
    }

    #[test]
    fn empty_video_is_an_error() {
        let encoder: Box<dyn FrameEncoder> = Box::new(FfmpegEncoder::new(
            EncodeConfig::mp4(Path::new("never.mp4"), 20.0),
        ));
        assert!(matches!(encoder.finish(), Err(BlochError::Video(_))));
    }
}
