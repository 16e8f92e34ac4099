//! Core logic for the globe explorer.
//!
//! This module provides:
//! - [`catalog`] country lookup and [`geojson`] boundary parsing
//! - Orthographic projection and [`geometry_path`] SVG path generation
//! - [`GlobeCamera`] gesture handling with [`tween`] rotation interpolation
//! - [`DragTracker`] / [`PinchTracker`] pointer bookkeeping
//! - [`animation`] enter/exit state machines
//! - [`DetailsState`] ticketed detail-panel data

pub mod animation;
pub mod boundary;
mod camera;
pub mod catalog;
mod details;
pub mod error;
pub mod geojson;
mod gesture;
mod path;
mod projection;
pub mod retry;
pub mod tween;

pub use camera::GlobeCamera;
pub use details::{DetailsState, RequestTicket, statistics_rows};
pub use gesture::{DragTracker, PinchTracker};
pub use path::geometry_path;
pub use projection::Rotation;
