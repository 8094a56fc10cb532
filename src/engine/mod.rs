//! Orchestration: gate lists in, animation files out.
//!
//! [`BlochEngine`] ties the sequencer, the frame renderer and an encoder
//! together. Single animations stream frame by frame into the encoder;
//! comparisons are recorded first because both sides must be paired.

mod options;
mod recording;
mod sink;

use std::path::PathBuf;

pub use self::sink::EncodingSink;
use crate::animation::{run_single, PhaseTiming, Sequencer};
use crate::error::BlochError;
use crate::export::{open_encoder, output_path};
use crate::gates::Instruction;
use crate::options::{Options, PanelOptions};
use crate::renderer::{ComparisonRenderer, FrameRenderer, Panel};

/// Renders gate animations with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct BlochEngine {
    options: Options,
}

impl BlochEngine {
    /// Engine using `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Phase timing derived from the options.
    ///
    /// Fails when the frame rate is not a positive number.
    pub fn timing(&self) -> Result<PhaseTiming, BlochError> {
        let fps = self.options.render.fps;
        if !(fps.is_finite() && fps > 0.0) {
            return Err(BlochError::OptionsParse(format!(
                "frame rate must be positive, got {fps}"
            )));
        }
        Ok(PhaseTiming::new(fps, &self.options.timing))
    }

    /// Render the single animation of `instructions` to `name` in the
    /// configured format and return the written path.
    pub fn animate(
        &self,
        name: &str,
        instructions: &[Instruction],
    ) -> Result<PathBuf, BlochError> {
        let timing = self.timing()?;
        let format = self.options.render.format;
        let path = output_path(name, format);
        let encoder = open_encoder(format, &path, timing.fps)?;
        let sink =
            EncodingSink::new(FrameRenderer::new(&self.options), encoder);

        let mut sequencer = Sequencer::new(sink, timing);
        run_single(&mut sequencer, instructions)?;
        let frames = sequencer.frames_emitted();
        let written = sequencer.into_sink().finish()?;
        log::info!(
            "saved \"{}\" ({frames} frames) with gate sequence \"{}\"",
            written.display(),
            sequence_text(instructions)
        );
        Ok(written)
    }

    /// Render `first` and `second` side by side with a comparison panel and
    /// return the written path.
    pub fn compare(
        &self,
        name: &str,
        first: &[Instruction],
        second: &[Instruction],
        panel: &PanelOptions,
    ) -> Result<PathBuf, BlochError> {
        let timing = self.timing()?;
        let pairs = self.record_comparison(first, second)?;
        let panel = Panel::new(panel, first, second, &self.options.colors.ink);
        let renderer = ComparisonRenderer::new(&self.options, &panel);

        let format = self.options.render.format;
        let path = output_path(name, format);
        let mut encoder = open_encoder(format, &path, timing.fps)?;
        for pair in &pairs {
            encoder.encode(&renderer.render(pair))?;
        }
        let written = encoder.finish()?;
        log::info!(
            "saved \"{}\" ({} frames) comparing \"{}\" with \"{}\"",
            written.display(),
            pairs.len(),
            sequence_text(first),
            sequence_text(second)
        );
        Ok(written)
    }
}

/// Gate symbols of a list joined for log output.
fn sequence_text(instructions: &[Instruction]) -> String {
    instructions
        .iter()
        .filter_map(Instruction::symbol)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::parse_gate_list;
    use crate::options::OutputFormat;

    fn fast_svg_options() -> Options {
        let mut options = Options::default();
        options.render.format = OutputFormat::Svg;
        options.render.fps = 5.0;
        options
    }

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn count_files(dir: &std::path::Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn animate_streams_every_frame() {
        let engine = BlochEngine::new(fast_svg_options());
        let gates = parse_gate_list(&["x"]).unwrap();
        let expected = engine.record_single(&gates).unwrap().len();
        let dir = scratch("bloch_engine_animate");
        let written = engine.animate(dir.to_str().unwrap(), &gates).unwrap();
        assert_eq!(written, dir);
        assert_eq!(count_files(&dir), expected);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn compare_writes_paired_frames() {
        let engine = BlochEngine::new(fast_svg_options());
        let first = parse_gate_list(&["h,z,h"]).unwrap();
        let second = parse_gate_list(&["x"]).unwrap();
        let expected =
            engine.record_comparison(&first, &second).unwrap().len();
        let dir = scratch("bloch_engine_compare");
        let written = engine
            .compare(
                dir.to_str().unwrap(),
                &first,
                &second,
                &PanelOptions::default(),
            )
            .unwrap();
        assert_eq!(count_files(&written), expected);
        let frame =
            std::fs::read_to_string(written.join("frame_00000.svg")).unwrap();
        assert!(frame.contains(r#"width="1248""#));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn sequence_text_skips_pauses() {
        let gates = parse_gate_list(&["h", "wait", "inv_s", "i"]).unwrap();
        assert_eq!(sequence_text(&gates), "H S⁻¹ I");
    }
}
