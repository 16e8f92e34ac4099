//! View-state types for the globe page.

/// Pose of the globe surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GlobePose {
    /// Entry pose used only on first mount.
    #[default]
    Initial,
    /// No selection: neutral pose.
    Empty,
    /// A country is selected: offset to make room for the detail panel.
    Selected,
}

impl GlobePose {
    pub fn for_selection(has_selection: bool) -> Self {
        if has_selection { Self::Selected } else { Self::Empty }
    }

    /// CSS transform parameters for this pose.
    ///
    /// The compact layout stacks the panel below the globe, so a selection
    /// shrinks the globe and lifts it instead of pushing it sideways.
    pub fn transform(self, compact: bool) -> PoseTransform {
        match (self, compact) {
            (Self::Initial, _) => PoseTransform { scale: 0.2, x: 0.0, y: 0.0, opacity: 1.0 },
            (Self::Empty, _) => PoseTransform { scale: 1.0, x: 0.0, y: 80.0, opacity: 1.0 },
            (Self::Selected, false) => PoseTransform { scale: 1.0, x: -400.0, y: 0.0, opacity: 1.0 },
            (Self::Selected, true) => PoseTransform { scale: 0.7, x: 0.0, y: -60.0, opacity: 1.0 },
        }
    }
}

/// Animated transform of an element: uniform scale, offset in px, opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoseTransform {
    pub scale: f64,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

impl PoseTransform {
    /// Detail panel while hidden: shifted left and transparent.
    pub const PANEL_HIDDEN: Self = Self { scale: 1.0, x: -300.0, y: 0.0, opacity: 0.0 };
    pub const PANEL_SHOWN: Self = Self { scale: 1.0, x: 0.0, y: 0.0, opacity: 1.0 };

    /// Inline style string (`transform` + `opacity`).
    pub fn to_style(self) -> String {
        format!(
            "transform: translate({:.2}px, {:.2}px) scale({:.4}); opacity: {:.3};",
            self.x, self.y, self.scale, self.opacity
        )
    }
}

/// Expandable data tab of the detail panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataTab {
    Summary,
    Statistics,
}

impl DataTab {
    pub fn title(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Statistics => "General Data",
        }
    }
}
