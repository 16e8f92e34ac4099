//! Orthographic projection.
//!
//! Follows the d3-geo conventions: rotation `[λ, φ, γ]` in degrees is applied
//! as a longitude shift followed by a φ/γ rotation of the sphere, the visible
//! hemisphere is the one facing the viewer (clip angle 90°), and screen y grows
//! downwards.

use crate::models::Position;

/// Viewpoint orientation in degrees.
///
/// `gamma` (roll) stays zero for user-driven rotation; it only becomes
/// non-zero while a spherical interpolation is in flight.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
    pub lambda: f64,
    pub phi: f64,
    pub gamma: f64,
}

impl Rotation {
    pub const fn new(lambda: f64, phi: f64) -> Self {
        Self { lambda, phi, gamma: 0.0 }
    }

    pub const fn from_angles(angles: [f64; 2]) -> Self {
        Self::new(angles[0], angles[1])
    }
}

/// Orthographic projection state: scale, rotation, translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orthographic {
    scale: f64,
    rotation: Rotation,
    translate: [f64; 2],
}

impl Orthographic {
    pub fn new(scale: f64, translate: [f64; 2]) -> Self {
        Self {
            scale,
            rotation: Rotation::default(),
            translate,
        }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Rotate a position onto the view sphere.
    ///
    /// Returns the unit vector `[x, y, z]` where `x` points at the viewer,
    /// `y` to screen right and `z` to screen up. The point is on the visible
    /// hemisphere iff `x > 0`.
    pub fn rotate(&self, position: Position) -> [f64; 3] {
        let lambda = (position[0] + self.rotation.lambda).to_radians();
        let phi = position[1].to_radians();
        let (sin_dp, cos_dp) = self.rotation.phi.to_radians().sin_cos();
        let (sin_dg, cos_dg) = self.rotation.gamma.to_radians().sin_cos();

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();
        let k = z * cos_dp + x * sin_dp;

        [
            x * cos_dp - z * sin_dp,
            y * cos_dg - k * sin_dg,
            k * cos_dg + y * sin_dg,
        ]
    }

    /// Map a view-sphere vector to screen coordinates (ignores visibility).
    pub fn to_screen(&self, v: [f64; 3]) -> [f64; 2] {
        [
            self.translate[0] + v[1] * self.scale,
            self.translate[1] - v[2] * self.scale,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    impl Orthographic {
        /// `None` when the position lies on the far hemisphere.
        fn project(&self, position: Position) -> Option<[f64; 2]> {
            let v = self.rotate(position);
            (v[0] > 0.0).then(|| self.to_screen(v))
        }
    }

    fn assert_close(a: [f64; 2], b: [f64; 2]) {
        assert!(
            (a[0] - b[0]).abs() < EPS && (a[1] - b[1]).abs() < EPS,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_origin_projects_to_translation() {
        let p = Orthographic::new(250.0, [300.0, 300.0]);
        assert_close(p.project([0.0, 0.0]).unwrap(), [300.0, 300.0]);
    }

    #[test]
    fn test_axes_orientation() {
        let p = Orthographic::new(100.0, [0.0, 0.0]);
        let s = 100.0 * 45f64.to_radians().sin();
        // East is screen right, north is screen up.
        assert_close(p.project([45.0, 0.0]).unwrap(), [s, 0.0]);
        assert_close(p.project([0.0, 45.0]).unwrap(), [0.0, -s]);
    }

    #[test]
    fn test_far_side_is_clipped() {
        let p = Orthographic::new(100.0, [0.0, 0.0]);
        assert!(p.project([180.0, 0.0]).is_none());
        assert!(p.project([0.0, 0.0]).is_some());
    }

    #[test]
    fn test_rotation_centers_target() {
        // Rotating by [-lon, -lat] brings (lon, lat) to the centre.
        let p = Orthographic::new(250.0, [300.0, 300.0]).with_rotation(Rotation::new(-2.5, -46.5));
        assert_close(p.project([2.5, 46.5]).unwrap(), [300.0, 300.0]);
    }

    #[test]
    fn test_north_pole_with_default_tilt() {
        // A -30° φ rotation tilts the north pole towards the viewer.
        let p = Orthographic::new(100.0, [0.0, 0.0]).with_rotation(Rotation::new(0.0, -30.0));
        let pole = p.project([0.0, 90.0]).unwrap();
        assert!((pole[0]).abs() < EPS);
        assert!((pole[1] + 100.0 * 30f64.to_radians().cos()).abs() < EPS);
    }

    #[test]
    fn test_rotated_vector_is_unit() {
        let p = Orthographic::new(1.0, [0.0, 0.0]).with_rotation(Rotation {
            lambda: 33.0,
            phi: -12.0,
            gamma: 7.0,
        });
        let v = p.rotate([-71.0, 18.0]);
        let norm = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
        assert!((norm - 1.0).abs() < EPS);
    }
}
