//! Minimal vector drawing model that serializes to SVG.
//!
//! Coordinates are y-up drawing units; the y axis is flipped when the
//! document is written. Every container paints its children in ascending
//! `z` order (stable for equal `z`), which is all the depth sorting a
//! sphere of bands needs.

mod path;
mod text;

use std::fmt::{self, Write};

use glam::DVec2;
pub use path::PathData;
pub use text::{Anchor, Baseline, Text, TextSpan};

/// Number printed with at most four decimals and no trailing zeros.
#[derive(Debug, Clone, Copy)]
pub struct Num(pub f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 1e4).round() / 1e4;
        if rounded == 0.0 || !rounded.is_finite() {
            return f.write_str("0");
        }
        let text = format!("{rounded:.4}");
        f.write_str(text.trim_end_matches('0').trim_end_matches('.'))
    }
}

/// XML-escape text content and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Straight stroked segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Start point.
    pub from: DVec2,
    /// End point.
    pub to: DVec2,
    /// Stroke paint.
    pub stroke: String,
    /// Stroke width in drawing units.
    pub width: f64,
}

impl Line {
    /// Segment from `from` to `to`.
    #[must_use]
    pub fn new(from: DVec2, to: DVec2, stroke: &str, width: f64) -> Self {
        Self {
            from,
            to,
            stroke: stroke.to_owned(),
            width,
        }
    }

    fn write(&self, out: &mut String) -> fmt::Result {
        write!(
            out,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            Num(self.from.x),
            Num(-self.from.y),
            Num(self.to.x),
            Num(-self.to.y),
            escape(&self.stroke),
            Num(self.width),
        )
    }
}

/// Filled outline.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Outline.
    pub data: PathData,
    /// Fill paint.
    pub fill: String,
    /// Opacity in [0, 1].
    pub opacity: f64,
}

impl Path {
    /// Opaque filled outline.
    #[must_use]
    pub fn filled(data: PathData, fill: &str) -> Self {
        Self {
            data,
            fill: fill.to_owned(),
            opacity: 1.0,
        }
    }

    fn write(&self, out: &mut String) -> fmt::Result {
        out.push_str(r#"<path d=""#);
        self.data.write_d(out)?;
        write!(out, r#"" fill="{}" stroke="none""#, escape(&self.fill))?;
        if self.opacity < 1.0 {
            write!(out, r#" opacity="{}""#, Num(self.opacity))?;
        }
        out.push_str("/>");
        Ok(())
    }
}

/// Axis-aligned filled rectangle; `corner` is the bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Bottom-left corner.
    pub corner: DVec2,
    /// Width and height.
    pub size: DVec2,
    /// Fill paint.
    pub fill: String,
}

impl Rect {
    /// Rectangle with bottom-left `corner` and extent `size`.
    #[must_use]
    pub fn new(corner: DVec2, size: DVec2, fill: &str) -> Self {
        Self {
            corner,
            size,
            fill: fill.to_owned(),
        }
    }

    fn write(&self, out: &mut String) -> fmt::Result {
        write!(
            out,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            Num(self.corner.x),
            Num(-(self.corner.y + self.size.y)),
            Num(self.size.x),
            Num(self.size.y),
            escape(&self.fill),
        )
    }
}

/// Anything that can be placed in a [`Group`].
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// Nested group.
    Group(Group),
    /// Filled outline.
    Path(Path),
    /// Stroked segment.
    Line(Line),
    /// Filled rectangle.
    Rect(Rect),
    /// Text line.
    Text(Text),
}

impl Element {
    fn write(&self, out: &mut String) -> fmt::Result {
        match self {
            Self::Group(g) => g.write(out),
            Self::Path(p) => p.write(out),
            Self::Line(l) => l.write(out),
            Self::Rect(r) => r.write(out),
            Self::Text(t) => t.write(out),
        }
    }
}

impl From<Group> for Element {
    fn from(g: Group) -> Self {
        Self::Group(g)
    }
}

impl From<Path> for Element {
    fn from(p: Path) -> Self {
        Self::Path(p)
    }
}

impl From<Line> for Element {
    fn from(l: Line) -> Self {
        Self::Line(l)
    }
}

impl From<Rect> for Element {
    fn from(r: Rect) -> Self {
        Self::Rect(r)
    }
}

impl From<Text> for Element {
    fn from(t: Text) -> Self {
        Self::Text(t)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Layer {
    z: f64,
    element: Element,
}

/// Container with shared opacity and placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Opacity applied to the group as a whole. Zero omits the group.
    pub opacity: f64,
    /// Translation applied after scaling.
    pub offset: DVec2,
    /// Uniform scale about the group origin.
    pub scale: f64,
    children: Vec<Layer>,
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl Group {
    /// Empty, opaque, untransformed group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            opacity: 1.0,
            offset: DVec2::ZERO,
            scale: 1.0,
            children: Vec::new(),
        }
    }

    /// Change the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Change the translation.
    #[must_use]
    pub fn translated(mut self, offset: DVec2) -> Self {
        self.offset = offset;
        self
    }

    /// Change the scale.
    #[must_use]
    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Add a child painted at depth `z`.
    pub fn append(&mut self, element: impl Into<Element>, z: f64) {
        self.children.push(Layer {
            z,
            element: element.into(),
        });
    }

    /// Number of direct children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the group has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct children in paint order.
    #[must_use]
    pub fn painted(&self) -> Vec<&Element> {
        let mut order: Vec<&Layer> = self.children.iter().collect();
        order.sort_by(|a, b| a.z.total_cmp(&b.z));
        order.into_iter().map(|layer| &layer.element).collect()
    }

    fn write(&self, out: &mut String) -> fmt::Result {
        if self.opacity <= 0.0 || self.children.is_empty() {
            return Ok(());
        }
        out.push_str("<g");
        if self.opacity < 1.0 {
            write!(out, r#" opacity="{}""#, Num(self.opacity))?;
        }
        if self.offset != DVec2::ZERO || self.scale != 1.0 {
            write!(
                out,
                r#" transform="translate({},{}) scale({})""#,
                Num(self.offset.x),
                Num(-self.offset.y),
                Num(self.scale)
            )?;
        }
        out.push('>');
        for element in self.painted() {
            element.write(out)?;
        }
        out.push_str("</g>");
        Ok(())
    }
}

/// A complete frame: view box, output size and content.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    /// View box width in drawing units.
    pub width: f64,
    /// View box height in drawing units.
    pub height: f64,
    /// Bottom-left corner of the view box.
    pub origin: DVec2,
    /// Output width in pixels.
    pub render_width: u32,
    /// Paint filling the whole view box, if any.
    pub background: Option<String>,
    /// Content.
    pub root: Group,
}

impl Drawing {
    /// Drawing whose view box starts at `origin`.
    #[must_use]
    pub fn new(
        width: f64,
        height: f64,
        origin: DVec2,
        render_width: u32,
    ) -> Self {
        Self {
            width,
            height,
            origin,
            render_width,
            background: None,
            root: Group::new(),
        }
    }

    /// Drawing whose view box is centered on the origin.
    #[must_use]
    pub fn centered(width: f64, height: f64, render_width: u32) -> Self {
        Self::new(
            width,
            height,
            DVec2::new(-width / 2.0, -height / 2.0),
            render_width,
        )
    }

    /// Change the background.
    #[must_use]
    pub fn with_background(mut self, background: Option<String>) -> Self {
        self.background = background;
        self
    }

    /// Add a top-level element at depth `z`.
    pub fn append(&mut self, element: impl Into<Element>, z: f64) {
        self.root.append(element, z);
    }

    /// Output height in pixels, keeping the view box aspect ratio.
    #[must_use]
    pub fn render_height(&self) -> u32 {
        let h = f64::from(self.render_width) * self.height / self.width;
        (h.round() as u32).max(1)
    }

    /// Serialize as a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(16 * 1024);
        // Writing into a String cannot fail.
        let _ = self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) -> fmt::Result {
        let top = self.origin.y + self.height;
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="{} {} {} {}">"#,
            self.render_width,
            self.render_height(),
            Num(self.origin.x),
            Num(-top),
            Num(self.width),
            Num(self.height),
        )?;
        if let Some(background) = &self.background {
            Rect::new(
                self.origin,
                DVec2::new(self.width, self.height),
                background,
            )
            .write(out)?;
        }
        self.root.write(out)?;
        out.push_str("</svg>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_compact() {
        assert_eq!(Num(1.0).to_string(), "1");
        assert_eq!(Num(-0.0).to_string(), "0");
        assert_eq!(Num(0.00001).to_string(), "0");
        assert_eq!(Num(0.123_456).to_string(), "0.1235");
        assert_eq!(Num(-2.5).to_string(), "-2.5");
        assert_eq!(Num(f64::NAN).to_string(), "0");
    }

    #[test]
    fn children_paint_in_z_order_stably() {
        let mut g = Group::new();
        g.append(Text::plain("back", 0.1, DVec2::ZERO), -1.0);
        g.append(Text::plain("front", 0.1, DVec2::ZERO), 5.0);
        g.append(Text::plain("middle-a", 0.1, DVec2::ZERO), 0.0);
        g.append(Text::plain("middle-b", 0.1, DVec2::ZERO), 0.0);
        let order: Vec<String> = g
            .painted()
            .into_iter()
            .map(|e| match e {
                Element::Text(t) => t.content(),
                _ => String::new(),
            })
            .collect();
        assert_eq!(order, ["back", "middle-a", "middle-b", "front"]);
    }

    #[test]
    fn transparent_groups_are_omitted() {
        let mut d = Drawing::centered(2.0, 2.0, 100);
        let mut hidden = Group::new().with_opacity(0.0);
        hidden.append(Line::new(DVec2::ZERO, DVec2::ONE, "red", 0.1), 0.0);
        d.append(hidden, 0.0);
        assert!(!d.to_svg().contains("<line"));
    }

    #[test]
    fn document_has_flipped_view_box_and_background() {
        let mut d = Drawing::new(10.0, 4.0, DVec2::new(-5.0, -1.5), 1248)
            .with_background(Some("white".to_owned()));
        d.append(Rect::new(DVec2::ZERO, DVec2::new(1.0, 0.5), "#000"), 0.0);
        let svg = d.to_svg();
        assert!(svg.contains(r#"width="1248" height="499""#));
        assert!(svg.contains(r#"viewBox="-5 -2.5 10 4""#));
        assert!(svg.contains(r#"<rect x="-5" y="-2.5" width="10" height="4" fill="white"/>"#));
        assert!(svg.contains(r##"<rect x="0" y="-0.5" width="1" height="0.5" fill="#000"/>"##));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn group_transform_is_written() {
        let mut d = Drawing::centered(2.0, 2.0, 10);
        let mut g = Group::new().translated(DVec2::new(-2.5, 1.0)).scaled(0.5);
        g.append(Line::new(DVec2::ZERO, DVec2::X, "black", 0.1), 0.0);
        d.append(g, 0.0);
        assert!(d
            .to_svg()
            .contains(r#"transform="translate(-2.5,-1) scale(0.5)""#));
    }

    #[test]
    fn render_height_keeps_aspect() {
        assert_eq!(Drawing::centered(5.0, 3.0, 624).render_height(), 374);
    }
}
