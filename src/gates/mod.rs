//! Gate catalog and gate-list parsing.
//!
//! A gate is never simulated: it is a rotation of the Bloch sphere about a
//! fixed axis by a fixed angle, plus the text shown while it animates.

mod catalog;
mod parse;

use std::f64::consts::PI;

pub use catalog::{catalog_names, lookup};
use glam::{DQuat, DVec3};
pub use parse::{parse_gate_list, parse_instruction};

use crate::error::BlochError;

/// A named rotation of the Bloch sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate {
    /// Short symbol in equation markup (`H`, `√X⁻¹`, `R_x`).
    pub symbol: String,
    /// Caption drawn while the gate animates (`H Gate:`).
    pub label: String,
    /// Unit rotation axis in Bloch coordinates.
    pub axis: DVec3,
    /// Right-handed rotation angle in radians.
    pub angle: f64,
}

impl Gate {
    /// Build a gate, normalizing `axis`.
    ///
    /// Fails with [`BlochError::InvalidGate`] when the axis has zero length
    /// or any component is not finite.
    pub fn new(
        symbol: impl Into<String>,
        label: impl Into<String>,
        axis: DVec3,
        angle: f64,
    ) -> Result<Self, BlochError> {
        let symbol = symbol.into();
        let axis = axis.try_normalize().ok_or_else(|| {
            BlochError::InvalidGate {
                token: symbol.clone(),
                reason: format!("rotation axis {axis} has no direction"),
            }
        })?;
        if !angle.is_finite() {
            return Err(BlochError::InvalidGate {
                token: symbol,
                reason: "rotation angle is not finite".to_owned(),
            });
        }
        Ok(Self {
            symbol,
            label: label.into(),
            axis,
            angle,
        })
    }

    /// Rotation after fraction `t` of the gate has been applied.
    #[must_use]
    pub fn partial_rotation(&self, t: f64) -> DQuat {
        DQuat::from_axis_angle(self.axis, self.angle * t)
    }

    /// Full rotation of the gate.
    #[must_use]
    pub fn rotation(&self) -> DQuat {
        self.partial_rotation(1.0)
    }

    /// Angle as a multiple of π.
    #[must_use]
    pub fn turns_of_pi(&self) -> f64 {
        self.angle / PI
    }
}

/// One step of a gate list.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    /// Animate a gate: highlight, rotate, un-highlight.
    Gate(Gate),
    /// Hold still for as long as a gate would take.
    Identity,
    /// Hold still for the configured wait.
    Wait,
    /// Suppress the trailing wait at the end of the list.
    NoWait,
}

impl Instruction {
    /// The gate, if this instruction animates one.
    #[must_use]
    pub fn gate(&self) -> Option<&Gate> {
        match self {
            Self::Gate(gate) => Some(gate),
            _ => None,
        }
    }

    /// Symbol shown in circuit diagrams and equations. Identity shows as
    /// `I`; pauses have no symbol.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Gate(gate) => Some(&gate.symbol),
            Self::Identity => Some("I"),
            Self::Wait | Self::NoWait => None,
        }
    }
}
