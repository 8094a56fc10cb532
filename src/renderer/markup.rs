//! Small math-markup subset rendered to styled text spans.
//!
//! Supports `$` delimiters (ignored), `\ket{..}`, `\bra{..}`, Greek letters,
//! `\dagger`, `\cdot`, `\sqrt`, `\,` and `^`/`_` scripts with a single
//! character or a braced argument. Whitespace is ignored as in math mode.

use std::iter::Peekable;
use std::str::Chars;

use crate::svg::{Baseline, TextSpan};

const THIN_SPACE: &str = "\u{2009}";

type Input<'a> = Peekable<Chars<'a>>;

/// Render markup into spans, merging neighbouring runs on the same baseline.
#[must_use]
pub fn parse_markup(source: &str) -> Vec<TextSpan> {
    let mut out = Spans::default();
    let mut input = source.chars().peekable();
    sequence(&mut input, Baseline::Normal, &mut out, false);
    out.0
}

#[derive(Default)]
struct Spans(Vec<TextSpan>);

impl Spans {
    fn push(&mut self, text: &str, baseline: Baseline) {
        if text.is_empty() {
            return;
        }
        match self.0.last_mut() {
            Some(last) if last.baseline == baseline => last.text.push_str(text),
            _ => self.0.push(TextSpan {
                text: text.to_owned(),
                baseline,
            }),
        }
    }

    fn push_char(&mut self, c: char, baseline: Baseline) {
        let mut buf = [0; 4];
        self.push(c.encode_utf8(&mut buf), baseline);
    }
}

fn sequence(
    input: &mut Input<'_>,
    baseline: Baseline,
    out: &mut Spans,
    nested: bool,
) {
    while let Some(c) = input.next() {
        match c {
            '}' if nested => return,
            '{' => sequence(input, baseline, out, true),
            '\\' => command(input, baseline, out),
            '^' => script(input, Baseline::Super, baseline, out),
            '_' => script(input, Baseline::Sub, baseline, out),
            '$' | '}' => {}
            c if c.is_whitespace() => {}
            c => out.push_char(c, baseline),
        }
    }
}

fn script(
    input: &mut Input<'_>,
    shift: Baseline,
    current: Baseline,
    out: &mut Spans,
) {
    // Scripts do not nest further; a script inside a script stays put.
    let baseline = if current == Baseline::Normal {
        shift
    } else {
        current
    };
    argument(input, baseline, out);
}

fn argument(input: &mut Input<'_>, baseline: Baseline, out: &mut Spans) {
    while input.next_if(|c| c.is_whitespace()).is_some() {}
    match input.next() {
        Some('{') => sequence(input, baseline, out, true),
        Some('\\') => command(input, baseline, out),
        Some(c) => out.push_char(c, baseline),
        None => {}
    }
}

fn command(input: &mut Input<'_>, baseline: Baseline, out: &mut Spans) {
    let mut name = String::new();
    while let Some(c) = input.next_if(char::is_ascii_alphabetic) {
        name.push(c);
    }
    if name.is_empty() {
        match input.next() {
            Some(',' | ';' | ':' | ' ') => out.push(THIN_SPACE, baseline),
            Some(c) => out.push_char(c, baseline),
            None => {}
        }
        return;
    }
    match name.as_str() {
        "ket" => {
            out.push("|", baseline);
            argument(input, baseline, out);
            out.push("⟩", baseline);
        }
        "bra" => {
            out.push("⟨", baseline);
            argument(input, baseline, out);
            out.push("|", baseline);
        }
        "sqrt" => {
            out.push("√", baseline);
            argument(input, baseline, out);
        }
        "quad" => out.push("\u{2003}", baseline),
        other => {
            let found = symbol(other);
            if found.is_none() {
                log::warn!("unsupported markup command \\{other}");
            }
            out.push(found.unwrap_or(other), baseline);
        }
    }
}

fn symbol(name: &str) -> Option<&'static str> {
    Some(match name {
        "alpha" => "α",
        "beta" => "β",
        "gamma" => "γ",
        "delta" => "δ",
        "epsilon" => "ε",
        "zeta" => "ζ",
        "eta" => "η",
        "theta" => "θ",
        "iota" => "ι",
        "kappa" => "κ",
        "lambda" => "λ",
        "mu" => "μ",
        "nu" => "ν",
        "xi" => "ξ",
        "pi" => "π",
        "rho" => "ρ",
        "sigma" => "σ",
        "tau" => "τ",
        "upsilon" => "υ",
        "phi" | "varphi" => "φ",
        "chi" => "χ",
        "psi" => "ψ",
        "omega" => "ω",
        "Gamma" => "Γ",
        "Delta" => "Δ",
        "Theta" => "Θ",
        "Lambda" => "Λ",
        "Xi" => "Ξ",
        "Pi" => "Π",
        "Sigma" => "Σ",
        "Phi" => "Φ",
        "Psi" => "Ψ",
        "Omega" => "Ω",
        "dagger" => "†",
        "cdot" => "·",
        "times" => "×",
        "pm" => "±",
        "otimes" => "⊗",
        "rangle" => "⟩",
        "langle" => "⟨",
        _ => return None,
    })
}
