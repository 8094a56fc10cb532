use std::fmt;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::error::BlochError;
use crate::svg::Drawing;

/// Straight (non-premultiplied) RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA bytes, `width * height * 4` long.
    pub pixels: Vec<u8>,
}

/// Renders drawings to pixels through usvg and resvg.
pub struct Rasterizer {
    options: usvg::Options<'static>,
}

impl fmt::Debug for Rasterizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rasterizer")
            .field("fonts", &self.options.fontdb.len())
            .finish_non_exhaustive()
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    /// Rasterizer with the system fonts loaded.
    #[must_use]
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        log::debug!("loaded {} font faces", options.fontdb.len());
        Self { options }
    }

    /// Render `drawing` at its render size.
    pub fn rasterize(&self, drawing: &Drawing) -> Result<RgbaImage, BlochError> {
        let tree = usvg::Tree::from_str(&drawing.to_svg(), &self.options)
            .map_err(|e| BlochError::Svg(e.to_string()))?;
        let width = drawing.render_width;
        let height = drawing.render_height();
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            BlochError::Svg(format!("cannot allocate a {width}x{height} frame"))
        })?;
        let size = tree.size();
        let transform = Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let pixels = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        Ok(RgbaImage {
            width,
            height,
            pixels,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::svg::Rect;

    #[test]
    fn renders_background_and_shapes() {
        let mut drawing = Drawing::centered(2.0, 2.0, 20)
            .with_background(Some("white".to_owned()));
        drawing.append(
            Rect::new(DVec2::new(-1.0, -1.0), DVec2::new(1.0, 2.0), "#f00"),
            0.0,
        );
        let image = Rasterizer::new().rasterize(&drawing).unwrap();
        assert_eq!((image.width, image.height), (20, 20));
        assert_eq!(image.pixels.len(), 20 * 20 * 4);
        // Left half red, right half white.
        let at = |x: usize, y: usize| {
            let i = (y * 20 + x) * 4;
            &image.pixels[i..i + 4]
        };
        assert_eq!(at(2, 10), [255, 0, 0, 255]);
        assert_eq!(at(17, 10), [255, 255, 255, 255]);
    }

    #[test]
    fn transparent_background_keeps_alpha() {
        let drawing = Drawing::centered(1.0, 1.0, 4);
        let image = Rasterizer::new().rasterize(&drawing).unwrap();
        assert!(image.pixels.chunks(4).all(|p| p[3] == 0));
    }
}
