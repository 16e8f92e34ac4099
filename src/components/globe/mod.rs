//! Globe render surface.
//!
//! - [`Globe`] - Orthographic SVG globe with drag / wheel / pinch gestures
//! - [`Headline`] - Page title that follows the selection

mod globe;
mod headline;
mod hooks;

pub use globe::Globe;
pub use headline::Headline;
