//! Middle panel of a comparison frame: equals sign, circuit and equation.

use glam::DVec2;

use super::markup::parse_markup;
use crate::gates::Instruction;
use crate::options::PanelOptions;
use crate::svg::{Group, Line, Rect, Text};

const EQUALS_BARS: [DVec2; 2] =
    [DVec2::new(-0.4, 0.075), DVec2::new(-0.4, -0.15)];
const EQUALS_BAR_SIZE: DVec2 = DVec2::new(0.8, 0.075);

const CIRCUIT_Y: f64 = 2.0;
const EQUATION_Y: f64 = -0.8;
const EQUATION_SIZE: f64 = 0.3;

const GATE_BOX: f64 = 0.3;
const GATE_GAP: f64 = 0.15;
const GATE_TEXT_SIZE: f64 = 0.16;
const BOX_BORDER: f64 = 0.015;
const WIRE_WIDTH: f64 = 0.015;
/// Horizontal room taken by the `=` between the two circuits.
const CIRCUIT_EQUALS: f64 = 0.4;
/// Widest the circuit may be before it is scaled down.
const MAX_CIRCUIT_WIDTH: f64 = 9.0;

/// Content of the comparison panel.
#[derive(Debug, Clone)]
pub struct Panel {
    /// Circuit symbols of the first sequence, in application order.
    pub first: Vec<String>,
    /// Circuit symbols of the second sequence, in application order.
    pub second: Vec<String>,
    /// Equation markup, or `None` to omit the equation.
    pub equation: Option<String>,
    /// Whether the circuit diagram is drawn.
    pub show_circuit: bool,
    /// Ink color.
    pub ink: String,
}

/// Circuit symbols of an instruction list. Pauses have none.
#[must_use]
pub fn circuit_symbols(instructions: &[Instruction]) -> Vec<String> {
    instructions
        .iter()
        .filter_map(|i| i.symbol().map(str::to_owned))
        .collect()
}

/// Equation markup stating that both sequences act alike on `|ψ⟩`.
///
/// Operators are written right to left, as they compose. Identity gates
/// are left out unless a side has nothing else.
#[must_use]
pub fn derive_equation(first: &[String], second: &[String]) -> String {
    fn side(symbols: &[String]) -> String {
        let mut ops: Vec<&str> = symbols
            .iter()
            .rev()
            .map(String::as_str)
            .filter(|s| *s != "I")
            .collect();
        if ops.is_empty() && !symbols.is_empty() {
            ops.push("I");
        }
        format!("{}\\ket{{\\psi}}", ops.concat())
    }
    format!("${}={}$", side(first), side(second))
}

impl Panel {
    /// Panel for two instruction lists.
    #[must_use]
    pub fn new(
        options: &PanelOptions,
        first: &[Instruction],
        second: &[Instruction],
        ink: &str,
    ) -> Self {
        let first = circuit_symbols(first);
        let second = circuit_symbols(second);
        let equation = options.show_equation.then(|| {
            options
                .equation
                .clone()
                .unwrap_or_else(|| derive_equation(&first, &second))
        });
        Self {
            first,
            second,
            equation,
            show_circuit: options.show_circuit,
            ink: ink.to_owned(),
        }
    }

    /// Panel drawing centred on the group origin.
    #[must_use]
    pub fn render(&self) -> Group {
        let mut group = Group::new();
        for corner in EQUALS_BARS {
            group.append(Rect::new(corner, EQUALS_BAR_SIZE, &self.ink), 0.0);
        }
        if self.show_circuit {
            group.append(self.circuit(), 0.0);
        }
        if let Some(equation) = &self.equation {
            group.append(
                Text::from_spans(
                    parse_markup(equation),
                    EQUATION_SIZE,
                    DVec2::new(0.0, EQUATION_Y),
                )
                .filled(&self.ink),
                0.0,
            );
        }
        group
    }

    fn wire_width(gates: usize) -> f64 {
        gates as f64 * (GATE_BOX + GATE_GAP) + GATE_GAP
    }

    fn circuit(&self) -> Group {
        let left = Self::wire_width(self.first.len());
        let right = Self::wire_width(self.second.len());
        let width = left + CIRCUIT_EQUALS + right;
        let scale = (MAX_CIRCUIT_WIDTH / width).min(1.0);

        let mut group = Group::new()
            .translated(DVec2::new(0.0, CIRCUIT_Y))
            .scaled(scale);
        let start = -width / 2.0;
        self.wire(&mut group, &self.first, start);
        let equals = DVec2::new(start + left + CIRCUIT_EQUALS / 2.0, 0.0);
        group.append(
            Text::plain("=", GATE_TEXT_SIZE * 1.5, equals).filled(&self.ink),
            0.0,
        );
        self.wire(&mut group, &self.second, start + left + CIRCUIT_EQUALS);
        group
    }

    fn wire(&self, group: &mut Group, symbols: &[String], start: f64) {
        let end = start + Self::wire_width(symbols.len());
        group.append(
            Line::new(
                DVec2::new(start, 0.0),
                DVec2::new(end, 0.0),
                &self.ink,
                WIRE_WIDTH,
            ),
            0.0,
        );
        let half = GATE_BOX / 2.0;
        for (i, symbol) in symbols.iter().enumerate() {
            let center =
                start + GATE_GAP + half + i as f64 * (GATE_BOX + GATE_GAP);
            let corner = DVec2::new(center - half, -half);
            group.append(
                Rect::new(corner, DVec2::splat(GATE_BOX), &self.ink),
                1.0,
            );
            group.append(
                Rect::new(
                    corner + BOX_BORDER,
                    DVec2::splat(GATE_BOX - 2.0 * BOX_BORDER),
                    "white",
                ),
                1.0,
            );
            group.append(
                Text::from_spans(
                    parse_markup(symbol),
                    GATE_TEXT_SIZE,
                    DVec2::new(center, 0.0),
                )
                .filled(&self.ink),
                2.0,
            );
        }
    }
}
