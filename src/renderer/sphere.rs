//! Bloch sphere drawing.
//!
//! The outer sphere (three bands, axis stubs, axis letters) never moves.
//! The inner sphere carries the accumulated gate rotation and fades with
//! the inner opacity; gate annotations fade with the annotation opacity.

use std::f64::consts::PI;

use glam::{DQuat, DVec2, DVec3};

use super::geometry::{arrow_head, rotation_indicator, Plane, Ring};
use crate::animation::FrameState;
use crate::camera::Projector;
use crate::options::{ColorOptions, Options, StyleOptions};
use crate::svg::{Anchor, Group, Line, Path, Text};

const OUTER_RADII: (f64, f64) = (0.925, 1.0);
const INNER_RADII: (f64, f64) = (0.7, 0.8);
/// Outer bands are pushed far in front of or behind the inner sphere.
const OUTER_DEPTH_SCALE: f64 = 10.0;
/// Depth for elements that always paint on top.
const TOP: f64 = 100.0;

const AXIS_LETTERS: [(&str, DVec3, f64); 3] = [
    ("X", DVec3::X, 1.7),
    ("Y", DVec3::Y, 1.35),
    ("Z", DVec3::Z, 1.4),
];
const LETTER_SIZE: f64 = 0.2;

const LABEL_SIZE: f64 = 0.4;
const LABEL_POSITION: DVec2 = DVec2::new(-0.6, 1.2);

const HIGHLIGHT_LENGTH: f64 = 1.18;
const HIGHLIGHT_WIDTH: f64 = 0.04;
const HIGHLIGHT_HEAD: f64 = 3.0;

const STUB_WIDTH: f64 = 0.02;
const INNER_AXIS_WIDTH: f64 = 0.015;
const AXIS_HEAD: f64 = 4.0;

const KET_SIZE: f64 = 0.2;
const INNER_KET_SCALE: f64 = 0.75;
const BLOCH_VECTOR_LENGTH: f64 = 0.8;

/// Elevations of the inner latitude lines.
const ELEVATIONS: [f64; 4] = [PI / 6.0, PI / 3.0, -PI / 3.0, -PI / 6.0];

/// Builds the drawing of one Bloch sphere from a frame state.
#[derive(Debug, Clone)]
pub struct SphereRenderer {
    projector: Projector,
    colors: ColorOptions,
    style: StyleOptions,
}

impl SphereRenderer {
    /// Renderer for the given options.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            projector: Projector::new(&options.camera),
            colors: options.colors.clone(),
            style: options.style.clone(),
        }
    }

    /// Sphere centred on the group origin.
    #[must_use]
    pub fn render(&self, state: &FrameState) -> Group {
        let mut group = Group::new();
        self.draw_outer_bands(&mut group);
        group.append(
            self.inner_sphere(state),
            self.projector.depth(DVec3::ZERO),
        );
        self.draw_outer_axes(&mut group);
        if self.style.ket_labels {
            self.draw_kets(&mut group);
        }
        self.draw_annotations(&mut group, state);
        group
    }

    fn band_colors(&self) -> [(Plane, &str); 3] {
        [
            (Plane::Equator, self.colors.equator.as_str()),
            (Plane::XzMeridian, self.colors.xz_meridian.as_str()),
            (Plane::YzMeridian, self.colors.yz_meridian.as_str()),
        ]
    }

    fn draw_outer_bands(&self, group: &mut Group) {
        let (r_inner, r_outer) = OUTER_RADII;
        for (plane, color) in self.band_colors() {
            let ring = Ring::new(plane, DQuat::IDENTITY, r_inner, r_outer);
            for sector in ring.sectors(&self.projector) {
                group.append(
                    Path::filled(sector.outline, color),
                    sector.depth * OUTER_DEPTH_SCALE,
                );
            }
        }
    }

    fn inner_sphere(&self, state: &FrameState) -> Group {
        let q = state.orientation;
        let mut group = Group::new().with_opacity(state.inner_opacity);

        if self.style.draws_bands() {
            let (r_inner, r_outer) = INNER_RADII;
            for (plane, color) in self.band_colors() {
                let ring = Ring::new(plane, q, r_inner, r_outer);
                for sector in ring.sectors(&self.projector) {
                    group.append(
                        Path::filled(sector.outline, color),
                        sector.depth,
                    );
                }
            }
        } else {
            self.arrow(
                &mut group,
                (DVec3::ZERO, q * DVec3::Z * BLOCH_VECTOR_LENGTH),
                &self.colors.bloch_vector,
                HIGHLIGHT_WIDTH,
                Some(HIGHLIGHT_HEAD),
                0.0,
            );
        }

        if self.style.elevation_lines {
            for elevation in ELEVATIONS {
                let r = 0.75 * elevation.cos();
                let ring = Ring::new(Plane::Equator, q, r - 0.01, r + 0.01)
                    .lifted(0.75 * elevation.sin());
                for sector in ring.sectors(&self.projector) {
                    group.append(
                        Path::filled(sector.outline, &self.colors.elevation),
                        sector.depth,
                    );
                }
            }
        }

        for axis in [DVec3::X, DVec3::Y, DVec3::Z] {
            let axis = q * axis;
            self.arrow(
                &mut group,
                (axis * -0.65, axis * 0.6),
                &self.colors.ink,
                INNER_AXIS_WIDTH,
                Some(AXIS_HEAD),
                0.0,
            );
        }

        if self.style.inner_ket_labels {
            for (text, pole) in [("|0⟩", DVec3::Z), ("|1⟩", -DVec3::Z)] {
                let p = q * pole * BLOCH_VECTOR_LENGTH;
                group.append(
                    Text::plain(
                        text,
                        KET_SIZE * INNER_KET_SCALE,
                        self.projector.project(p),
                    )
                    .filled(&self.colors.ink),
                    self.projector.depth(p),
                );
            }
        }
        group
    }

    fn draw_outer_axes(&self, group: &mut Group) {
        let ink = &self.colors.ink;
        for (letter, axis, distance) in AXIS_LETTERS {
            self.arrow(
                group,
                (axis, axis * 1.2),
                ink,
                STUB_WIDTH,
                Some(AXIS_HEAD),
                TOP,
            );
            self.arrow(group, (-axis, axis * -1.2), ink, STUB_WIDTH, None, 0.0);
            group.append(
                Text::plain(
                    letter,
                    LETTER_SIZE,
                    self.projector.project(axis * distance),
                )
                .filled(ink),
                TOP,
            );
        }
    }

    fn draw_kets(&self, group: &mut Group) {
        let offsets = [
            ("|0⟩", DVec3::Z, DVec2::new(-0.15, 0.13)),
            ("|1⟩", -DVec3::Z, DVec2::new(0.15, -0.13)),
        ];
        for (text, pole, offset) in offsets {
            let at = self.projector.project(pole) + offset;
            group.append(
                Text::plain(text, KET_SIZE, at).filled(&self.colors.ink),
                TOP,
            );
        }
    }

    fn draw_annotations(&self, group: &mut Group, state: &FrameState) {
        let opacity = state.extra_opacity;
        if opacity <= 0.0 {
            return;
        }
        if let Some(label) = &state.label {
            group.append(
                Text::plain(&**label, LABEL_SIZE, LABEL_POSITION)
                    .anchored(Anchor::End)
                    .filled(&self.colors.label)
                    .with_opacity(opacity),
                TOP,
            );
        }
        let Some(axis) = state.axis else {
            return;
        };
        let mut highlight = Group::new().with_opacity(opacity);
        self.arrow(
            &mut highlight,
            (DVec3::ZERO, axis * HIGHLIGHT_LENGTH),
            &self.colors.axis_highlight,
            HIGHLIGHT_WIDTH,
            Some(HIGHLIGHT_HEAD),
            0.0,
        );
        group.append(highlight, TOP);

        if self.style.rotation_indicator {
            let indicator = state.rotation.and_then(|angle| {
                rotation_indicator(axis, angle, &self.projector)
            });
            if let Some(indicator) = indicator {
                let color = &self.colors.rotation_indicator;
                let mut ring = Group::new().with_opacity(opacity);
                ring.append(Path::filled(indicator.ring, color), 0.0);
                ring.append(Path::filled(indicator.head, color), 0.0);
                group.append(ring, indicator.depth);
            }
        }
    }

    /// Stroked line between two Bloch points with an optional head.
    fn arrow(
        &self,
        group: &mut Group,
        (from, to): (DVec3, DVec3),
        color: &str,
        width: f64,
        head_scale: Option<f64>,
        z: f64,
    ) {
        let from = self.projector.project(from);
        let to = self.projector.project(to);
        group.append(Line::new(from, to, color, width), z);
        let head =
            head_scale.and_then(|scale| arrow_head(from, to, width, scale));
        if let Some(head) = head {
            group.append(Path::filled(head, color), z);
        }
    }
}
