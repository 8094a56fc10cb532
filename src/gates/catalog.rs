//! Fixed table of named gates.

use glam::DVec3;

use super::Gate;

struct CatalogEntry {
    name: &'static str,
    symbol: &'static str,
    axis: [f64; 3],
    /// Rotation angle as a multiple of π.
    turns_of_pi: f64,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "h",
        symbol: "H",
        axis: [1.0, 0.0, 1.0],
        turns_of_pi: 1.0,
    },
    CatalogEntry {
        name: "x",
        symbol: "X",
        axis: [1.0, 0.0, 0.0],
        turns_of_pi: 1.0,
    },
    CatalogEntry {
        name: "y",
        symbol: "Y",
        axis: [0.0, 1.0, 0.0],
        turns_of_pi: 1.0,
    },
    CatalogEntry {
        name: "z",
        symbol: "Z",
        axis: [0.0, 0.0, 1.0],
        turns_of_pi: 1.0,
    },
    CatalogEntry {
        name: "sqrt_x",
        symbol: "√X",
        axis: [1.0, 0.0, 0.0],
        turns_of_pi: 0.5,
    },
    CatalogEntry {
        name: "sqrt_y",
        symbol: "√Y",
        axis: [0.0, 1.0, 0.0],
        turns_of_pi: 0.5,
    },
    CatalogEntry {
        name: "s",
        symbol: "S",
        axis: [0.0, 0.0, 1.0],
        turns_of_pi: 0.5,
    },
    CatalogEntry {
        name: "t",
        symbol: "T",
        axis: [0.0, 0.0, 1.0],
        turns_of_pi: 0.25,
    },
];

const INVERSE_PREFIX: &str = "inv_";

impl CatalogEntry {
    fn gate(&self, inverse: bool) -> Option<Gate> {
        let (symbol, sign) = if inverse {
            (format!("{}⁻¹", self.symbol), -1.0)
        } else {
            (self.symbol.to_owned(), 1.0)
        };
        let label = format!("{symbol} Gate:");
        Gate::new(
            symbol,
            label,
            DVec3::from_array(self.axis),
            sign * self.turns_of_pi * std::f64::consts::PI,
        )
        .ok()
    }
}

/// Resolve a plain catalog name (`h`, `sqrt_x`, `inv_t`, ...).
#[must_use]
pub fn lookup(name: &str) -> Option<Gate> {
    let (base, inverse) = match name.strip_prefix(INVERSE_PREFIX) {
        Some(base) => (base, true),
        None => (name, false),
    };
    CATALOG
        .iter()
        .find(|entry| entry.name == base)
        .and_then(|entry| entry.gate(inverse))
}

/// Every plain gate name accepted by [`lookup`], forward gates first.
#[must_use]
pub fn catalog_names() -> Vec<String> {
    let forward = CATALOG.iter().map(|entry| entry.name.to_owned());
    let inverse = CATALOG
        .iter()
        .map(|entry| format!("{INVERSE_PREFIX}{}", entry.name));
    forward.chain(inverse).collect()
}
