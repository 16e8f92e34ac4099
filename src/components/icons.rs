//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBookOpen as Summary, LuChartBar as Statistics, LuChevronDown as Expand,
        LuGlobe as Globe, LuMapPin as Location, LuRotateCw as Retry, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Retry, BsBarChartFill as Statistics, BsBookFill as Summary,
        BsChevronDown as Expand, BsGeoAltFill as Location, BsGlobe as Globe, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CLOSE, Close);
themed_icon!(EXPAND, Expand);
themed_icon!(GLOBE, Globe);
themed_icon!(LOCATION, Location);
themed_icon!(RETRY, Retry);
themed_icon!(STATISTICS, Statistics);
themed_icon!(SUMMARY, Summary);
