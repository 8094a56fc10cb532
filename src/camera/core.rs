use glam::{DMat3, DVec2, DVec3};

use crate::options::CameraOptions;

/// Bloch axes in view space: X toward the viewer, Y right, Z up.
const BLOCH_TO_VIEW: DMat3 = DMat3::from_cols(
    DVec3::new(0.0, 0.0, 1.0),
    DVec3::new(1.0, 0.0, 0.0),
    DVec3::new(0.0, 1.0, 0.0),
);

/// Fixed perspective camera looking at the sphere from slightly above.
///
/// View space is x right, y up, z toward the viewer. Depth values returned
/// by [`Projector::depth`] grow toward the viewer, so painting in ascending
/// depth order draws far geometry first.
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    /// Bloch coordinates to view space.
    pub view: DMat3,
    /// Distance from the eye to the sphere center.
    pub camera_distance: f64,
}

impl Projector {
    /// Build the view from camera options.
    #[must_use]
    pub fn new(camera: &CameraOptions) -> Self {
        // Positive spin swings +X (toward the viewer) to the left; positive
        // tilt moves it down, i.e. the eye looks down onto the equator.
        let spin = DMat3::from_rotation_y(-camera.spin_deg.to_radians());
        let tilt = DMat3::from_rotation_x(camera.tilt_deg.to_radians());
        let half_fov = (camera.fov_deg.to_radians() / 2.0).max(1e-6);
        Self {
            view: tilt * spin * BLOCH_TO_VIEW,
            camera_distance: (camera.view_size / 2.0) / half_fov.tan(),
        }
    }

    /// Bloch-space point in view space.
    #[inline]
    #[must_use]
    pub fn view_point(&self, p: DVec3) -> DVec3 {
        self.view * p
    }

    /// Painter's depth of a Bloch-space point.
    #[inline]
    #[must_use]
    pub fn depth(&self, p: DVec3) -> f64 {
        self.view_point(p).z
    }

    /// Perspective projection onto the drawing plane. Points at depth 0 keep
    /// their size; nearer points grow.
    #[must_use]
    pub fn project(&self, p: DVec3) -> DVec2 {
        let v = self.view_point(p);
        let d = self.camera_distance;
        let scale = d / (d - v.z).max(1e-6);
        DVec2::new(v.x * scale, v.y * scale)
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> Projector {
        Projector::new(&CameraOptions {
            spin_deg: 0.0,
            tilt_deg: 0.0,
            ..CameraOptions::default()
        })
    }

    #[test]
    fn axes_face_the_expected_way_without_spin_or_tilt() {
        let p = flat();
        assert!((p.view_point(DVec3::X) - DVec3::Z).length() < 1e-12);
        assert!((p.view_point(DVec3::Y) - DVec3::X).length() < 1e-12);
        assert!((p.view_point(DVec3::Z) - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn default_view_puts_x_down_and_left() {
        let p = Projector::default();
        let x = p.project(DVec3::X);
        assert!(x.x < 0.0);
        assert!(x.y < 0.0);
        // Z still points up, Y to the right.
        assert!(p.project(DVec3::Z).y > 0.9);
        assert!(p.project(DVec3::Y).x > 0.9);
    }

    #[test]
    fn looking_down_puts_north_pole_in_front() {
        let p = Projector::default();
        assert!(p.depth(DVec3::Z) > 0.0);
        assert!(p.depth(-DVec3::Z) < 0.0);
        assert!(p.depth(DVec3::X) > 0.0);
    }

    #[test]
    fn camera_distance_from_fov() {
        let p = Projector::default();
        let expected = 2.0 / (22.5_f64.to_radians() / 2.0).tan();
        assert!((p.camera_distance - expected).abs() < 1e-12);
    }

    #[test]
    fn perspective_enlarges_near_points() {
        let p = flat();
        // Y axis sits at depth 0 and is not scaled.
        assert!((p.project(DVec3::Y).x - 1.0).abs() < 1e-12);
        // A point toward the viewer spreads further from the center.
        let near = p.project(DVec3::new(0.5, 1.0, 0.0));
        assert!(near.x > 1.0);
        let far = p.project(DVec3::new(-0.5, 1.0, 0.0));
        assert!(far.x < 1.0);
    }

    #[test]
    fn view_is_a_rotation() {
        let p = Projector::default();
        assert!((p.view.determinant() - 1.0).abs() < 1e-12);
        assert!((p.view_point(DVec3::new(1.0, 2.0, 3.0)).length()
            - 14.0_f64.sqrt())
        .abs()
            < 1e-12);
    }
}
