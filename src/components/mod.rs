//! UI components built with Leptos.
//!
//! - [`Home`] - Globe page (main entry point)
//! - [`globe`] - Orthographic globe and headline
//! - [`details`] - Country detail panel
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod details;
pub mod globe;
pub mod home;
pub mod icons;

pub use home::Home;
