//! Arrow heads and the rotation-direction indicator.

use std::f64::consts::PI;

use glam::{DVec2, DVec3};

use crate::camera::Projector;
use crate::svg::PathData;

/// Radii of the indicator ring around the highlighted axis.
const INDICATOR_RADII: (f64, f64) = (0.1, 0.16);

/// Where along the highlighted axis the indicator sits.
const INDICATOR_POSITION: f64 = 1.0;

/// Polyline segments of the indicator arc.
const INDICATOR_SEGMENTS: usize = 24;

/// Triangular head for a line from `from` to `to`.
///
/// The head is sized in units of `scale * stroke_width`: the tip lies 0.9
/// units past `to`, the base 0.1 units behind it, and the base is one unit
/// wide. Returns `None` when the line has no direction.
#[must_use]
pub fn arrow_head(
    from: DVec2,
    to: DVec2,
    stroke_width: f64,
    scale: f64,
) -> Option<PathData> {
    let dir = (to - from).try_normalize()?;
    let u = scale * stroke_width;
    let normal = dir.perp();
    let base = to - dir * (0.1 * u);
    Some(PathData::polygon(&[
        to + dir * (0.9 * u),
        base + normal * (0.5 * u),
        base - normal * (0.5 * u),
    ]))
}

/// Projected shape of the rotation-direction indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct Indicator {
    /// Half ring around the axis.
    pub ring: PathData,
    /// Arrow head at the end of the ring, pointing along the rotation.
    pub head: PathData,
    /// Paint depth.
    pub depth: f64,
}

/// Curved arrow around `axis` showing which way a rotation by `angle` turns.
///
/// Returns `None` for a zero axis or a zero angle.
#[must_use]
pub fn rotation_indicator(
    axis: DVec3,
    angle: f64,
    projector: &Projector,
) -> Option<Indicator> {
    let axis = axis.try_normalize()?;
    if angle == 0.0 {
        return None;
    }
    let (u, v) = axis.any_orthonormal_pair();
    // Right-handed: positive angles turn u toward v.
    let v = if angle > 0.0 { v } else { -v };
    let center = axis * INDICATOR_POSITION;
    let (r_inner, r_outer) = INDICATOR_RADII;
    let at = |r: f64, theta: f64| {
        center + (u * theta.cos() + v * theta.sin()) * r
    };

    let arc = |r: f64| {
        (0..=INDICATOR_SEGMENTS)
            .map(|k| PI * k as f64 / INDICATOR_SEGMENTS as f64)
            .map(move |theta| projector.project(at(r, theta)))
    };
    let mut points: Vec<DVec2> = arc(r_outer).collect();
    let mut inner: Vec<DVec2> = arc(r_inner).collect();
    inner.reverse();
    points.extend(inner);

    // Head at θ = π, where the tangent is -v.
    let r_mid = (r_inner + r_outer) / 2.0;
    let size = 2.5 * (r_outer - r_inner);
    let anchor = at(r_mid, PI);
    let radial = -u;
    let tangent = -v;
    let base = anchor - tangent * (0.3 * size);
    let head = PathData::polygon(&[
        projector.project(base + radial * (0.5 * size)),
        projector.project(anchor + tangent * (0.7 * size)),
        projector.project(base - radial * (0.5 * size)),
    ]);

    Some(Indicator {
        ring: PathData::polygon(&points),
        head,
        depth: 9.0 * projector.depth(at(r_mid, PI / 2.0)),
    })
}
