//! Explicit animation state machines.
//!
//! A [`Tween`] moves a value towards a target over a fixed duration and can be
//! re-targeted at any time, restarting from whatever value is currently shown.
//! An [`AnimationController`] layers an enter/exit lifecycle on top:
//!
//! ```text
//! Idle --show--> Entering --done--> Settled --hide--> Exiting --done--> Idle
//! ```
//!
//! `show` during `Exiting` and `hide` during `Entering` reverse in place.

use crate::core::tween::ease_cubic_in_out;
use crate::models::PoseTransform;

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for PoseTransform {
    fn lerp(self, to: Self, t: f64) -> Self {
        Self {
            scale: self.scale.lerp(to.scale, t),
            x: self.x.lerp(to.x, t),
            y: self.y.lerp(to.y, t),
            opacity: self.opacity.lerp(to.opacity, t),
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Segment<T> {
    from: T,
    to: T,
    start_ms: f64,
    duration_ms: f64,
}

/// A value animated towards a target.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Lerp> {
    current: T,
    segment: Option<Segment<T>>,
}

impl<T: Lerp> Tween<T> {
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            segment: None,
        }
    }

    pub fn value(&self) -> T {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.segment.is_some()
    }

    /// Animate from the current value to `to`.
    pub fn retarget(&mut self, to: T, now_ms: f64, duration_ms: f64) {
        self.segment = Some(Segment {
            from: self.current,
            to,
            start_ms: now_ms,
            duration_ms,
        });
    }

    /// Advance to `now_ms`. Returns `true` when the running segment completed
    /// on this tick.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let Some(seg) = self.segment else {
            return false;
        };
        let t = if seg.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - seg.start_ms) / seg.duration_ms).clamp(0.0, 1.0)
        };
        if t >= 1.0 {
            self.current = seg.to;
            self.segment = None;
            return true;
        }
        self.current = seg.from.lerp(seg.to, ease_cubic_in_out(t));
        false
    }
}

/// Lifecycle phase of an element that animates in and out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Entering,
    Settled,
    Exiting,
}

/// Enter/exit animation for an element between a hidden and a shown value.
#[derive(Clone, Copy, Debug)]
pub struct AnimationController<T: Lerp> {
    phase: Phase,
    hidden: T,
    shown: T,
    duration_ms: f64,
    tween: Tween<T>,
}

impl<T: Lerp> AnimationController<T> {
    pub fn new(hidden: T, shown: T, duration_ms: f64) -> Self {
        Self {
            phase: Phase::Idle,
            hidden,
            shown,
            duration_ms,
            tween: Tween::new(hidden),
        }
    }

    /// Whether the element should be in the tree at all.
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Idle
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Exiting)
    }

    pub fn value(&self) -> T {
        self.tween.value()
    }

    pub fn show(&mut self, now_ms: f64) {
        if matches!(self.phase, Phase::Idle | Phase::Exiting) {
            self.phase = Phase::Entering;
            self.tween.retarget(self.shown, now_ms, self.duration_ms);
        }
    }

    pub fn hide(&mut self, now_ms: f64) {
        if matches!(self.phase, Phase::Entering | Phase::Settled) {
            self.phase = Phase::Exiting;
            self.tween.retarget(self.hidden, now_ms, self.duration_ms);
        }
    }

    /// Advance the animation and return the current value.
    pub fn tick(&mut self, now_ms: f64) -> T {
        if self.tween.tick(now_ms) {
            self.phase = match self.phase {
                Phase::Entering => Phase::Settled,
                Phase::Exiting => Phase::Idle,
                other => other,
            };
        }
        self.tween.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl<T: Lerp> AnimationController<T> {
        fn phase(&self) -> Phase {
            self.phase
        }
    }

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::new(0.0);
        tween.retarget(10.0, 0.0, 100.0);
        assert!(!tween.tick(50.0));
        assert!((tween.value() - 5.0).abs() < 1e-9);
        assert!(tween.tick(100.0));
        assert_eq!(tween.value(), 10.0);
        assert!(!tween.is_animating());
    }

    #[test]
    fn test_retarget_restarts_from_current_value() {
        let mut tween = Tween::new(0.0);
        tween.retarget(10.0, 0.0, 100.0);
        tween.tick(50.0);
        tween.retarget(0.0, 50.0, 100.0);
        tween.tick(50.0);
        assert!((tween.value() - 5.0).abs() < 1e-9);
        tween.tick(150.0);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_controller_lifecycle() {
        let mut ctl = AnimationController::new(
            PoseTransform::PANEL_HIDDEN,
            PoseTransform::PANEL_SHOWN,
            800.0,
        );
        assert_eq!(ctl.phase(), Phase::Idle);
        assert!(!ctl.is_mounted());

        ctl.show(0.0);
        assert_eq!(ctl.phase(), Phase::Entering);
        ctl.tick(400.0);
        assert_eq!(ctl.phase(), Phase::Entering);
        ctl.tick(800.0);
        assert_eq!(ctl.phase(), Phase::Settled);
        assert_eq!(ctl.value(), PoseTransform::PANEL_SHOWN);

        ctl.hide(1000.0);
        assert_eq!(ctl.phase(), Phase::Exiting);
        assert!(ctl.is_mounted());
        ctl.tick(1800.0);
        assert_eq!(ctl.phase(), Phase::Idle);
        assert!(!ctl.is_mounted());
        assert_eq!(ctl.value(), PoseTransform::PANEL_HIDDEN);
    }

    #[test]
    fn test_show_while_exiting_reverses() {
        let mut ctl = AnimationController::new(0.0, 1.0, 100.0);
        ctl.show(0.0);
        ctl.tick(100.0);
        ctl.hide(100.0);
        ctl.tick(150.0);
        let partial = ctl.value();
        assert!(partial > 0.0 && partial < 1.0);

        ctl.show(150.0);
        assert_eq!(ctl.phase(), Phase::Entering);
        assert_eq!(ctl.tick(150.0), partial);
        ctl.tick(250.0);
        assert_eq!(ctl.phase(), Phase::Settled);
    }

    #[test]
    fn test_redundant_calls_are_ignored() {
        let mut ctl = AnimationController::new(0.0, 1.0, 100.0);
        ctl.hide(0.0);
        assert_eq!(ctl.phase(), Phase::Idle);
        ctl.show(0.0);
        ctl.show(50.0);
        ctl.tick(100.0);
        assert_eq!(ctl.phase(), Phase::Settled);
    }
}
