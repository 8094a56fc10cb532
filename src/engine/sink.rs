use std::path::PathBuf;

use crate::animation::{FrameSink, FrameState};
use crate::error::BlochError;
use crate::export::FrameEncoder;
use crate::renderer::FrameRenderer;

/// Frame sink that renders and encodes each frame as it arrives.
pub struct EncodingSink {
    renderer: FrameRenderer,
    encoder: Box<dyn FrameEncoder>,
}

impl std::fmt::Debug for EncodingSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodingSink")
            .field("frames", &self.encoder.frames())
            .finish_non_exhaustive()
    }
}

impl EncodingSink {
    /// Sink drawing single-sphere frames into `encoder`.
    #[must_use]
    pub fn new(renderer: FrameRenderer, encoder: Box<dyn FrameEncoder>) -> Self {
        Self { renderer, encoder }
    }

    /// Finish the encoder and return the written path.
    pub fn finish(self) -> Result<PathBuf, BlochError> {
        self.encoder.finish()
    }
}

impl FrameSink for EncodingSink {
    fn push_frame(&mut self, frame: &FrameState) -> Result<(), BlochError> {
        self.encoder.encode(&self.renderer.single_frame(frame))
    }
}
