//! Flat rings on the sphere, split into depth-sorted sectors.
//!
//! A ring is drawn as `divisions` separate filled sectors so that each one
//! can be painted at its own depth: the back half of a band disappears
//! behind the inner sphere while the front half stays on top.

use std::f64::consts::{PI, TAU};

use glam::{DMat3, DQuat, DVec2, DVec3};

use crate::camera::Projector;
use crate::svg::PathData;

/// Polyline segments per sector arc.
const ARC_SEGMENTS: usize = 16;

/// Angular overlap between neighbouring sectors when the division count
/// leaves seams visible.
const SEAM_OVERLAP: f64 = PI / 500.0;

/// Great-circle planes the sphere is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plane {
    /// XY plane.
    Equator,
    /// Meridian through X and Z.
    XzMeridian,
    /// Meridian through Y and Z.
    YzMeridian,
}

impl Plane {
    /// All planes in paint order.
    pub const ALL: [Self; 3] = [Self::Equator, Self::XzMeridian, Self::YzMeridian];

    /// Maps local ring coordinates `(cos θ, sin θ, height)` to Bloch space.
    #[must_use]
    pub fn basis(self) -> DMat3 {
        match self {
            Self::Equator => DMat3::IDENTITY,
            Self::XzMeridian => DMat3::from_cols(DVec3::Z, DVec3::X, DVec3::Y),
            Self::YzMeridian => DMat3::from_cols(DVec3::Y, DVec3::Z, DVec3::X),
        }
    }
}

/// One filled piece of a ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingSector {
    /// Projected outline, outer arc then inner arc reversed.
    pub outline: PathData,
    /// View depth of the sector's mid-radius midpoint.
    pub depth: f64,
}

/// Annulus in a plane through (or parallel to) a great circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Local ring frame to Bloch space.
    pub frame: DMat3,
    /// Offset along the local normal.
    pub height: f64,
    /// Inner radius. Zero or less draws a filled disc outline.
    pub r_inner: f64,
    /// Outer radius.
    pub r_outer: f64,
    /// Number of sectors.
    pub divisions: usize,
}

impl Ring {
    /// Four-sector ring in `plane`, rotated by `rotation`.
    #[must_use]
    pub fn new(plane: Plane, rotation: DQuat, r_inner: f64, r_outer: f64) -> Self {
        Self {
            frame: DMat3::from_quat(rotation) * plane.basis(),
            height: 0.0,
            r_inner,
            r_outer,
            divisions: 4,
        }
    }

    /// Same ring shifted along its normal.
    #[must_use]
    pub fn lifted(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Same ring with a different sector count.
    #[must_use]
    pub fn with_divisions(mut self, divisions: usize) -> Self {
        self.divisions = divisions.max(1);
        self
    }

    /// Bloch-space point at radius `r` and angle `theta`.
    #[must_use]
    pub fn point(&self, r: f64, theta: f64) -> DVec3 {
        self.frame * DVec3::new(r * theta.cos(), r * theta.sin(), self.height)
    }

    fn arc(
        &self,
        projector: &Projector,
        r: f64,
        start: f64,
        end: f64,
    ) -> Vec<DVec2> {
        (0..=ARC_SEGMENTS)
            .map(|k| {
                let theta =
                    start + (end - start) * k as f64 / ARC_SEGMENTS as f64;
                projector.project(self.point(r, theta))
            })
            .collect()
    }

    /// Projected sectors with their paint depths.
    #[must_use]
    pub fn sectors(&self, projector: &Projector) -> Vec<RingSector> {
        let divs = self.divisions.max(1);
        let step = TAU / divs as f64;
        let overlap = if divs == 4 { 0.0 } else { SEAM_OVERLAP };
        let r_mid = (self.r_inner + self.r_outer) / 2.0;

        (0..divs)
            .map(|i| {
                let p = step * i as f64;
                let (start, end) = (p - step - overlap, p + overlap);
                let mut points = self.arc(projector, self.r_outer, start, end);
                if self.r_inner > 0.0 {
                    points.extend(
                        self.arc(projector, self.r_inner, end, start),
                    );
                }
                RingSector {
                    outline: PathData::polygon(&points),
                    depth: projector.depth(self.point(r_mid, p - step / 2.0)),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_bases_are_rotations() {
        for plane in Plane::ALL {
            assert!((plane.basis().determinant() - 1.0).abs() < 1e-12);
        }
        let xz = Plane::XzMeridian.basis() * DVec3::new(1.0, 2.0, 0.0);
        assert!((xz - DVec3::new(2.0, 0.0, 1.0)).length() < 1e-12);
        let yz = Plane::YzMeridian.basis() * DVec3::new(1.0, 2.0, 0.0);
        assert!((yz - DVec3::new(0.0, 1.0, 2.0)).length() < 1e-12);
    }

    #[test]
    fn four_sectors_without_overlap() {
        let ring = Ring::new(Plane::Equator, DQuat::IDENTITY, 0.925, 1.0);
        let sectors = ring.sectors(&Projector::default());
        assert_eq!(sectors.len(), 4);
        // Outer arc plus inner arc.
        assert_eq!(sectors[0].outline.points().count(), 2 * (ARC_SEGMENTS + 1));
        for sector in &sectors {
            for p in sector.outline.points() {
                assert!(p.length() < 1.2);
            }
        }
    }

    #[test]
    fn front_sector_is_deeper_than_back_sector() {
        // Sector 1 spans 0°..90°, between +X and +Y, facing the viewer.
        // Sector 3 spans 180°..270° on the far side.
        let ring = Ring::new(Plane::Equator, DQuat::IDENTITY, 0.925, 1.0);
        let sectors = ring.sectors(&Projector::default());
        assert!(sectors[1].depth > sectors[3].depth);
    }

    #[test]
    fn rotation_moves_the_ring() {
        let flipped = Ring::new(
            Plane::Equator,
            DQuat::from_rotation_x(PI / 2.0),
            0.7,
            0.8,
        );
        // The equator rotated about X contains the Z axis.
        let p = flipped.point(1.0, PI / 2.0);
        assert!((p - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn disc_without_inner_radius_has_single_arc() {
        let ring = Ring::new(Plane::Equator, DQuat::IDENTITY, 0.0, 0.5)
            .with_divisions(6);
        let sectors = ring.sectors(&Projector::default());
        assert_eq!(sectors.len(), 6);
        assert_eq!(sectors[0].outline.points().count(), ARC_SEGMENTS + 1);
    }

    #[test]
    fn sectors_overlap_only_when_not_quartered() {
        let projector = Projector::default();
        let first_point = |ring: &Ring| {
            ring.sectors(&projector)[0].outline.points().next().unwrap()
        };

        let sixths = Ring::new(Plane::Equator, DQuat::IDENTITY, 0.7, 0.8)
            .with_divisions(6);
        let expected =
            projector.project(sixths.point(0.8, -TAU / 6.0 - SEAM_OVERLAP));
        assert!((first_point(&sixths) - expected).length() < 1e-12);

        let quarters = Ring::new(Plane::Equator, DQuat::IDENTITY, 0.7, 0.8);
        let expected = projector.project(quarters.point(0.8, -TAU / 4.0));
        assert!((first_point(&quarters) - expected).length() < 1e-12);
    }

    #[test]
    fn lifted_ring_is_offset_along_normal() {
        let ring = Ring::new(Plane::Equator, DQuat::IDENTITY, 0.3, 0.32)
            .lifted(0.5);
        assert!((ring.point(0.3, 0.0).z - 0.5).abs() < 1e-12);
    }
}
