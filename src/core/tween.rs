//! Rotation interpolation.
//!
//! Rotations are converted to unit quaternions (versors) and interpolated with
//! spherical linear interpolation, which follows the great circle between two
//! orientations instead of averaging Euler angles.

use crate::core::projection::Rotation;

/// Unit quaternion `[w, x, y, z]`.
pub type Versor = [f64; 4];

/// Versor equivalent of a `[λ, φ, γ]` rotation.
pub fn versor_from_rotation(r: Rotation) -> Versor {
    let (sl, cl) = (r.lambda.to_radians() / 2.0).sin_cos();
    let (sp, cp) = (r.phi.to_radians() / 2.0).sin_cos();
    let (sg, cg) = (r.gamma.to_radians() / 2.0).sin_cos();
    [
        cl * cp * cg + sl * sp * sg,
        sl * cp * cg - cl * sp * sg,
        cl * sp * cg + sl * cp * sg,
        cl * cp * sg - sl * sp * cg,
    ]
}

/// Rotation equivalent of a versor; λ and γ land in `(-180, 180]`.
pub fn rotation_from_versor(q: Versor) -> Rotation {
    Rotation {
        lambda: (2.0 * (q[0] * q[1] + q[2] * q[3]))
            .atan2(1.0 - 2.0 * (q[1] * q[1] + q[2] * q[2]))
            .to_degrees(),
        phi: (2.0 * (q[0] * q[2] - q[3] * q[1]))
            .clamp(-1.0, 1.0)
            .asin()
            .to_degrees(),
        gamma: (2.0 * (q[0] * q[3] + q[1] * q[2]))
            .atan2(1.0 - 2.0 * (q[2] * q[2] + q[3] * q[3]))
            .to_degrees(),
    }
}

fn normalize(q: Versor) -> Versor {
    let n = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
    if n > 1e-10 {
        [q[0] / n, q[1] / n, q[2] / n, q[3] / n]
    } else {
        [1.0, 0.0, 0.0, 0.0]
    }
}

/// Spherical linear interpolation along the shorter arc.
pub fn slerp(a: Versor, b: Versor, t: f64) -> Versor {
    let mut dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3];

    let mut b = b;
    if dot < 0.0 {
        b = [-b[0], -b[1], -b[2], -b[3]];
        dot = -dot;
    }

    // Nearly parallel: linear interpolation is numerically safer.
    if dot > 0.9995 {
        return normalize([
            a[0] + t * (b[0] - a[0]),
            a[1] + t * (b[1] - a[1]),
            a[2] + t * (b[2] - a[2]),
            a[3] + t * (b[3] - a[3]),
        ]);
    }

    let theta_0 = dot.clamp(-1.0, 1.0).acos();
    let theta = theta_0 * t;
    let sin_theta = theta.sin();
    let sin_theta_0 = theta_0.sin();
    let s0 = theta.cos() - dot * sin_theta / sin_theta_0;
    let s1 = sin_theta / sin_theta_0;

    normalize([
        s0 * a[0] + s1 * b[0],
        s0 * a[1] + s1 * b[1],
        s0 * a[2] + s1 * b[2],
        s0 * a[3] + s1 * b[3],
    ])
}

/// Cubic ease-in-out on `[0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Timed rotation from the displayed orientation to a target.
#[derive(Clone, Copy, Debug)]
pub struct RotationTween {
    from: Versor,
    to: Versor,
    target: Rotation,
    start_ms: f64,
    duration_ms: f64,
}

impl RotationTween {
    pub fn new(from: Rotation, target: Rotation, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from: versor_from_rotation(from),
            to: versor_from_rotation(target),
            target,
            start_ms,
            duration_ms,
        }
    }

    fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// Orientation at `now_ms`; exactly the target once finished.
    pub fn sample(&self, now_ms: f64) -> Rotation {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.target;
        }
        rotation_from_versor(slerp(self.from, self.to, ease_cubic_in_out(t)))
    }
}
