//! Globe camera: the projection plus the gesture and animation state that
//! drives it.
//!
//! The render surface is the only owner of a [`GlobeCamera`]; gestures and the
//! programmatic rotation towards a selected country all go through it.

use crate::config::{DEFAULT_ROTATION, GlobeConfig};
use crate::core::projection::{Orthographic, Rotation};
use crate::core::tween::RotationTween;

#[derive(Clone, Debug)]
pub struct GlobeCamera {
    config: GlobeConfig,
    projection: Orthographic,
    /// Continuous zoom factor; display scale is `initial_scale * zoom`.
    zoom: f64,
    tween: Option<RotationTween>,
}

impl GlobeCamera {
    pub fn new(config: GlobeConfig) -> Self {
        let projection = Orthographic::new(config.initial_scale, config.center())
            .with_rotation(Rotation::from_angles(DEFAULT_ROTATION));
        Self {
            config,
            projection,
            zoom: 1.0,
            tween: None,
        }
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn projection(&self) -> &Orthographic {
        &self.projection
    }

    pub fn rotation(&self) -> Rotation {
        self.projection.rotation()
    }

    pub fn scale(&self) -> f64 {
        self.projection.scale()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Radius of the globe outline circle.
    pub fn radius(&self) -> f64 {
        self.projection.scale()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    // -------------------------------------------------------------------------
    // Gestures
    // -------------------------------------------------------------------------

    /// Apply one pointer-move delta in px.
    ///
    /// Rotation per pixel shrinks as the globe is zoomed in. A drag takes over
    /// from any in-flight rotation animation and drops the roll it left behind.
    pub fn drag(&mut self, dx: f64, dy: f64) {
        self.tween = None;
        let k = self.config.drag_sensitivity / self.projection.scale();
        let r = self.projection.rotation();
        self.projection
            .set_rotation(Rotation::new(r.lambda + dx * k, r.phi - dy * k));
    }

    /// Set the zoom factor, clamped to the configured bounds.
    ///
    /// Returns the factor actually applied.
    pub fn zoom_to(&mut self, factor: f64) -> f64 {
        let cfg = &self.config;
        let factor = if factor.is_finite() { factor } else { self.zoom };
        self.zoom = factor.clamp(cfg.min_zoom_factor, cfg.max_zoom_factor);
        let scale = (cfg.initial_scale * self.zoom).clamp(cfg.min_scale, cfg.max_scale);
        self.projection.set_scale(scale);
        self.zoom
    }

    /// Multiply the zoom factor (pinch ratio or wheel step).
    pub fn zoom_by(&mut self, ratio: f64) -> f64 {
        self.zoom_to(self.zoom * ratio)
    }

    /// Apply a wheel delta in px; negative `delta_y` zooms in.
    ///
    /// One `wheel_notch_px` of travel applies one full zoom step, so the small
    /// deltas of a trackpad zoom proportionally less.
    pub fn wheel(&mut self, delta_y: f64) -> f64 {
        let notches = delta_y / self.config.wheel_notch_px;
        if delta_y < 0.0 {
            self.zoom_by(self.config.zoom_in_step.powf(-notches))
        } else if delta_y > 0.0 {
            self.zoom_by(self.config.zoom_out_step.powf(notches))
        } else {
            self.zoom
        }
    }

    // -------------------------------------------------------------------------
    // Programmatic rotation
    // -------------------------------------------------------------------------

    /// Start rotating towards `target`, superseding any running rotation.
    ///
    /// The new animation starts from the orientation currently displayed.
    pub fn rotate_to(&mut self, target: Rotation, now_ms: f64) {
        self.tween = Some(RotationTween::new(
            self.projection.rotation(),
            target,
            now_ms,
            self.config.rotation_duration_ms(),
        ));
    }

    /// Advance the rotation animation. Returns `true` while still animating.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(tween) = self.tween else {
            return false;
        };
        self.projection.set_rotation(tween.sample(now_ms));
        if tween.is_finished(now_ms) {
            self.tween = None;
        }
        self.tween.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn camera() -> GlobeCamera {
        GlobeCamera::new(GlobeConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let cam = camera();
        assert_eq!(cam.scale(), 250.0);
        assert_eq!(cam.zoom(), 1.0);
        assert_eq!(cam.rotation(), Rotation::new(0.0, -30.0));
        assert_eq!(cam.projection().to_screen([1.0, 0.0, 0.0]), [300.0, 300.0]);
    }

    #[test]
    fn test_drag_accumulates_scaled_deltas() {
        let mut cam = camera();
        let start = cam.rotation();
        let ticks = [(4.0, -2.0), (10.0, 3.0), (-7.5, 0.5)];

        let mut expected = start;
        for (i, (dx, dy)) in ticks.iter().enumerate() {
            // Zoom between ticks so each delta uses the scale at its own tick.
            if i == 1 {
                cam.zoom_to(1.2);
            }
            let k = cam.config().drag_sensitivity / cam.scale();
            expected.lambda += dx * k;
            expected.phi -= dy * k;
            cam.drag(*dx, *dy);
        }

        let r = cam.rotation();
        assert!((r.lambda - expected.lambda).abs() < EPS);
        assert!((r.phi - expected.phi).abs() < EPS);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut cam = camera();
        assert_eq!(cam.zoom_to(0.3), 1.0);
        assert_eq!(cam.scale(), 250.0);
        assert_eq!(cam.zoom_to(5.0), 1.2);
        assert!((cam.scale() - 300.0).abs() < EPS);
        assert_eq!(cam.zoom_to(1.1), 1.1);
        assert_eq!(cam.zoom_to(f64::NAN), 1.1);
    }

    #[test]
    fn test_wheel_steps_stay_in_bounds() {
        let mut cam = camera();
        for _ in 0..10 {
            let z = cam.wheel(-100.0);
            assert!((1.0..=1.2).contains(&z));
        }
        assert_eq!(cam.zoom(), 1.2);
        for _ in 0..10 {
            cam.wheel(100.0);
        }
        assert_eq!(cam.zoom(), 1.0);
        assert_eq!(cam.radius(), cam.scale());
    }

    #[test]
    fn test_wheel_zoom_scales_with_delta() {
        let mut notch = camera();
        let full_step = notch.wheel(-100.0);
        assert!((full_step - 1.1487).abs() < 1e-9);

        // A burst of small trackpad deltas adds up to the same single step.
        let mut trackpad = camera();
        for _ in 0..10 {
            trackpad.wheel(-10.0);
        }
        assert!((trackpad.zoom() - full_step).abs() < 1e-9);

        let mut small = camera();
        let z = small.wheel(-4.0);
        assert!(z > 1.0 && z < 1.01);

        assert_eq!(small.wheel(f64::NAN), z);
    }

    #[test]
    fn test_rotate_to_settles_on_target() {
        let mut cam = camera();
        let target = Rotation::new(-2.5, -46.5);
        cam.rotate_to(target, 0.0);
        assert!(cam.is_animating());
        assert!(cam.tick(500.0));
        assert!(!cam.tick(1000.0));
        assert_eq!(cam.rotation(), target);
        assert!(!cam.is_animating());
    }

    #[test]
    fn test_new_rotation_supersedes_running_one() {
        let mut cam = camera();
        cam.rotate_to(Rotation::new(-2.5, -46.5), 0.0);
        cam.tick(400.0);
        let midway = cam.rotation();

        let second = Rotation::new(98.5, -39.5);
        cam.rotate_to(second, 400.0);
        // Restarts from the displayed orientation, not the old target.
        cam.tick(400.0);
        let r = cam.rotation();
        assert!((r.lambda - midway.lambda).abs() < 1e-6);
        assert!((r.phi - midway.phi).abs() < 1e-6);

        cam.tick(1400.0);
        assert_eq!(cam.rotation(), second);
    }

    #[test]
    fn test_drag_mid_rotation_clears_roll() {
        let mut cam = camera();
        cam.rotate_to(Rotation::new(-134.0, 25.0), 0.0);
        cam.tick(500.0);
        assert!(cam.rotation().gamma.abs() > 1.0);

        cam.drag(0.0, 0.0);
        assert_eq!(cam.rotation().gamma, 0.0);
        cam.drag(10.0, 0.0);
        assert_eq!(cam.rotation().gamma, 0.0);
    }

    #[test]
    fn test_drag_cancels_rotation() {
        let mut cam = camera();
        cam.rotate_to(Rotation::new(50.0, 0.0), 0.0);
        cam.drag(1.0, 0.0);
        assert!(!cam.is_animating());
        assert!(!cam.tick(2000.0));
    }
}
