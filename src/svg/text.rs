use std::fmt::{self, Write};

use glam::DVec2;

use super::{escape, Num};

const FONT_FAMILY: &str = "DejaVu Sans, Arial, Helvetica, sans-serif";
/// Relative size of superscripts and subscripts.
const SCRIPT_SCALE: f64 = 0.7;

/// Horizontal alignment of a text run relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    #[default]
    Middle,
    /// Text ends at the anchor.
    End,
}

impl Anchor {
    fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical placement of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Baseline {
    /// On the baseline.
    #[default]
    Normal,
    /// Raised and shrunk.
    Super,
    /// Lowered and shrunk.
    Sub,
}

/// A run of text sharing one baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpan {
    /// Characters of the run.
    pub text: String,
    /// Where the run sits.
    pub baseline: Baseline,
}

impl TextSpan {
    /// Span on the normal baseline.
    #[must_use]
    pub fn normal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            baseline: Baseline::Normal,
        }
    }
}

/// Single line of text, vertically centered on its anchor point.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Runs in reading order.
    pub spans: Vec<TextSpan>,
    /// Font size in drawing units.
    pub size: f64,
    /// Anchor point.
    pub at: DVec2,
    /// Horizontal alignment.
    pub anchor: Anchor,
    /// Fill paint.
    pub fill: String,
    /// Opacity in [0, 1].
    pub opacity: f64,
}

impl Text {
    /// Centered black text.
    #[must_use]
    pub fn plain(text: impl Into<String>, size: f64, at: DVec2) -> Self {
        Self::from_spans(vec![TextSpan::normal(text)], size, at)
    }

    /// Centered black text from pre-built spans.
    #[must_use]
    pub fn from_spans(spans: Vec<TextSpan>, size: f64, at: DVec2) -> Self {
        Self {
            spans,
            size,
            at,
            anchor: Anchor::Middle,
            fill: "black".to_owned(),
            opacity: 1.0,
        }
    }

    /// Change the alignment.
    #[must_use]
    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Change the fill.
    #[must_use]
    pub fn filled(mut self, fill: &str) -> Self {
        fill.clone_into(&mut self.fill);
        self
    }

    /// Change the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Concatenated characters of all spans.
    #[must_use]
    pub fn content(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub(super) fn write(&self, out: &mut String) -> fmt::Result {
        write!(
            out,
            r#"<text x="{}" y="{}" font-size="{}" font-family="{FONT_FAMILY}" text-anchor="{}" dominant-baseline="central" fill="{}""#,
            Num(self.at.x),
            Num(-self.at.y),
            Num(self.size),
            self.anchor.as_svg(),
            escape(&self.fill),
        )?;
        if self.opacity < 1.0 {
            write!(out, r#" opacity="{}""#, Num(self.opacity))?;
        }
        out.push('>');
        for span in &self.spans {
            match span.baseline {
                Baseline::Normal => {
                    write!(out, "<tspan>{}</tspan>", escape(&span.text))?;
                }
                Baseline::Super | Baseline::Sub => {
                    let shift = if span.baseline == Baseline::Super {
                        "super"
                    } else {
                        "sub"
                    };
                    write!(
                        out,
                        r#"<tspan baseline-shift="{shift}" font-size="{}">{}</tspan>"#,
                        Num(self.size * SCRIPT_SCALE),
                        escape(&span.text)
                    )?;
                }
            }
        }
        out.push_str("</text>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_escaped_and_flipped() {
        let text = Text::plain("a<b & c", 0.2, DVec2::new(1.0, 2.0))
            .anchored(Anchor::End)
            .filled("#c00");
        let mut out = String::new();
        text.write(&mut out).unwrap();
        assert!(out.contains(r#"x="1" y="-2""#));
        assert!(out.contains("a&lt;b &amp; c"));
        assert!(out.contains(r#"text-anchor="end""#));
        assert!(out.contains(r##"fill="#c00""##));
        assert!(!out.contains("opacity"));
    }

    #[test]
    fn scripts_are_shifted_and_shrunk() {
        let spans = vec![
            TextSpan::normal("X"),
            TextSpan {
                text: "†".to_owned(),
                baseline: Baseline::Super,
            },
        ];
        let text = Text::from_spans(spans, 0.5, DVec2::ZERO);
        let mut out = String::new();
        text.write(&mut out).unwrap();
        assert!(out.contains(r#"baseline-shift="super" font-size="0.35""#));
        assert_eq!(text.content(), "X†");
    }
}
