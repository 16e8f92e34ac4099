//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The country catalog is loaded at compile time using `include_str!`.

// =============================================================================
// Data Assets (loaded at compile time)
// =============================================================================

/// Static country catalog (JSON array of country records).
pub const COUNTRY_CATALOG: &str = include_str!("../assets/data/countries.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the headline.
pub const APP_NAME: &str = "Know Your World";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// External data endpoints.
pub mod api {
    /// World boundary dataset (GeoJSON FeatureCollection keyed by ISO alpha-3).
    pub const BOUNDARIES_URL: &str =
        "https://raw.githubusercontent.com/johan/world.geo.json/master/countries.geo.json";

    /// Encyclopedia page summary endpoint; the article title is appended.
    pub const SUMMARY_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary/";

    /// Country statistics endpoint; the alpha code is appended.
    pub const STATISTICS_BASE_URL: &str = "https://restcountries.com/v2/alpha/";
}

/// Retry policy for per-selection fetches.
pub mod retry {
    /// Total attempts including the first one.
    pub const MAX_ATTEMPTS: u32 = 3;
    /// Delay before the first retry; doubled on every further attempt.
    pub const BASE_DELAY_MS: u32 = 300;
}

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the parsed boundary dataset.
    pub const BOUNDARIES_KEY: &str = "boundaries_cache";
}

// =============================================================================
// Globe Configuration
// =============================================================================

/// Rotation used when the selected country carries no camera hint.
pub const DEFAULT_ROTATION: [f64; 2] = [0.0, -30.0];

/// Tuning constants for the globe render surface.
///
/// Passed into the globe component instead of living as module globals so
/// that alternative layouts (or tests) can run with their own values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlobeConfig {
    /// Projection scale (globe radius in px) at zoom factor 1.
    pub initial_scale: f64,
    /// Absolute lower bound on the projection scale.
    pub min_scale: f64,
    /// Absolute upper bound on the projection scale.
    pub max_scale: f64,
    /// Lower bound of the continuous zoom factor.
    pub min_zoom_factor: f64,
    /// Upper bound of the continuous zoom factor.
    pub max_zoom_factor: f64,
    /// Multiplier applied per wheel step towards the viewer.
    pub zoom_in_step: f64,
    /// Multiplier applied per wheel step away from the viewer.
    pub zoom_out_step: f64,
    /// Wheel travel (px) that counts as one zoom step.
    pub wheel_notch_px: f64,
    /// Degrees of rotation per pixel of drag, at scale 1.
    pub drag_sensitivity: f64,
    /// Duration of pose / panel transitions.
    pub transition_duration_secs: f64,
    /// Duration of the programmatic rotation towards a selected country.
    pub rotation_duration_secs: f64,
    /// SVG viewport size in user units.
    pub viewport: [f64; 2],
}

impl GlobeConfig {
    /// Projection translation: the centre of the viewport.
    pub fn center(&self) -> [f64; 2] {
        [self.viewport[0] / 2.0, self.viewport[1] / 2.0]
    }

    pub fn transition_duration_ms(&self) -> f64 {
        self.transition_duration_secs * MS_PER_SECOND
    }

    pub fn rotation_duration_ms(&self) -> f64 {
        self.rotation_duration_secs * MS_PER_SECOND
    }
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            initial_scale: 250.0,
            min_scale: 94.73,
            max_scale: 4594.79,
            min_zoom_factor: 1.0,
            max_zoom_factor: 1.2,
            zoom_in_step: 1.1487,
            zoom_out_step: 0.87055,
            wheel_notch_px: 100.0,
            drag_sensitivity: 90.0,
            transition_duration_secs: 0.8,
            rotation_duration_secs: 1.0,
            viewport: [600.0, 600.0],
        }
    }
}

// =============================================================================
// Layout Configuration
// =============================================================================

/// Media query for the compact (stacked) layout.
pub const COMPACT_MEDIA_QUERY: &str = "(max-width: 768px)";

// =============================================================================
// Time Constants
// =============================================================================

/// Milliseconds per second.
pub const MS_PER_SECOND: f64 = 1000.0;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
