use glam::DVec2;

use super::panel::Panel;
use super::sphere::SphereRenderer;
use crate::animation::FrameState;
use crate::options::Options;
use crate::svg::{Drawing, Group};

/// Size of a single-sphere frame in drawing units.
const SINGLE_SIZE: DVec2 = DVec2::new(5.0, 3.0);
/// Size and bottom-left corner of a comparison frame.
const COMPARE_SIZE: DVec2 = DVec2::new(10.0, 4.0);
const COMPARE_ORIGIN: DVec2 = DVec2::new(-5.0, -1.5);
/// Horizontal offset of each sphere in a comparison frame.
const COMPARE_OFFSET: f64 = 2.5;

/// Turns frame states into complete drawings.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    sphere: SphereRenderer,
    render_width: u32,
    background: Option<String>,
}

impl FrameRenderer {
    /// Renderer for the given options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            sphere: SphereRenderer::new(options),
            render_width: options.render.width.max(1),
            background: options.render.background.clone(),
        }
    }

    /// One sphere centred in a 5 × 3 frame.
    #[must_use]
    pub fn single_frame(&self, state: &FrameState) -> Drawing {
        let mut drawing =
            Drawing::centered(SINGLE_SIZE.x, SINGLE_SIZE.y, self.render_width)
                .with_background(self.background.clone());
        drawing.append(self.sphere.render(state), 0.0);
        drawing
    }

    /// Two spheres with the panel between them, twice as wide as a single
    /// frame.
    #[must_use]
    pub fn side_by_side(
        &self,
        left: &FrameState,
        right: &FrameState,
        panel: &Group,
    ) -> Drawing {
        let mut drawing = Drawing::new(
            COMPARE_SIZE.x,
            COMPARE_SIZE.y,
            COMPARE_ORIGIN,
            self.render_width.saturating_mul(2),
        )
        .with_background(self.background.clone());
        drawing.append(
            self.sphere
                .render(left)
                .translated(DVec2::new(-COMPARE_OFFSET, 0.0)),
            0.0,
        );
        drawing.append(
            self.sphere
                .render(right)
                .translated(DVec2::new(COMPARE_OFFSET, 0.0)),
            0.0,
        );
        drawing.append(panel.clone(), 0.0);
        drawing
    }
}

/// Draws comparison frames for one fixed pair of gate lists.
#[derive(Debug, Clone)]
pub struct ComparisonRenderer {
    frames: FrameRenderer,
    panel: Group,
}

impl ComparisonRenderer {
    /// Renderer with a prebuilt panel.
    #[must_use]
    pub fn new(options: &Options, panel: &Panel) -> Self {
        Self {
            frames: FrameRenderer::new(options),
            panel: panel.render(),
        }
    }

    /// Side-by-side frame of a state pair.
    #[must_use]
    pub fn render(&self, (left, right): &(FrameState, FrameState)) -> Drawing {
        self.frames.side_by_side(left, right, &self.panel)
    }
}
