//! Pointer gesture bookkeeping for the globe surface.

/// Pointer travel (px) beyond which a press counts as a drag, not a click.
const CLICK_SLOP_PX: f64 = 3.0;

/// Tracks a single-pointer drag and turns positions into per-move deltas.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragTracker {
    last: Option<[f64; 2]>,
    travelled: f64,
    /// Set on release of a press that moved; consumed by the next click.
    suppress_click: bool,
}

impl DragTracker {
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    pub fn press(&mut self, pos: [f64; 2]) {
        self.last = Some(pos);
        self.travelled = 0.0;
        self.suppress_click = false;
    }

    /// Delta since the previous position, or `None` when not pressed.
    pub fn move_to(&mut self, pos: [f64; 2]) -> Option<(f64, f64)> {
        let last = self.last?;
        let (dx, dy) = (pos[0] - last[0], pos[1] - last[1]);
        self.last = Some(pos);
        self.travelled += dx.hypot(dy);
        Some((dx, dy))
    }

    pub fn release(&mut self) {
        if self.last.take().is_some() {
            self.suppress_click = self.travelled > CLICK_SLOP_PX;
        }
    }

    /// Whether a click following the last release should be honoured.
    pub fn take_click(&mut self) -> bool {
        !std::mem::take(&mut self.suppress_click)
    }
}

/// Tracks the distance between two touches and reports scale ratios.
#[derive(Clone, Copy, Debug, Default)]
pub struct PinchTracker {
    last_distance: Option<f64>,
}

impl PinchTracker {
    pub fn is_active(&self) -> bool {
        self.last_distance.is_some()
    }

    /// Ratio of the new finger distance to the previous one.
    pub fn update(&mut self, distance: f64) -> Option<f64> {
        let previous = self.last_distance.replace(distance)?;
        (previous > 0.0 && distance > 0.0).then(|| distance / previous)
    }

    pub fn end(&mut self) {
        self.last_distance = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_deltas() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.move_to([5.0, 5.0]), None);

        drag.press([10.0, 10.0]);
        assert_eq!(drag.move_to([14.0, 7.0]), Some((4.0, -3.0)));
        assert_eq!(drag.move_to([14.0, 9.0]), Some((0.0, 2.0)));
        drag.release();
        assert!(!drag.is_active());
        assert_eq!(drag.move_to([20.0, 20.0]), None);
    }

    #[test]
    fn test_click_after_drag_is_suppressed_once() {
        let mut drag = DragTracker::default();
        drag.press([0.0, 0.0]);
        drag.move_to([10.0, 0.0]);
        drag.release();
        assert!(!drag.take_click());
        assert!(drag.take_click());
    }

    #[test]
    fn test_small_jitter_still_clicks() {
        let mut drag = DragTracker::default();
        drag.press([0.0, 0.0]);
        drag.move_to([1.0, 1.0]);
        drag.release();
        assert!(drag.take_click());
    }

    #[test]
    fn test_pinch_ratio() {
        let mut pinch = PinchTracker::default();
        assert_eq!(pinch.update(100.0), None);
        assert_eq!(pinch.update(150.0), Some(1.5));
        assert_eq!(pinch.update(75.0), Some(0.5));
        pinch.end();
        assert!(!pinch.is_active());
        assert_eq!(pinch.update(50.0), None);
    }
}
