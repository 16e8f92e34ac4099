//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Country`] - Static catalog records
//! - [`Feature`], [`FeatureCollection`], [`Geometry`], [`BoundaryState`] - Boundary dataset
//! - [`CountrySummary`], [`CountryStatistics`], [`FetchState`] - Remote panel data
//! - [`GlobePose`], [`PoseTransform`], [`DataTab`] - View state

mod country;
mod geo;
mod globe;
mod remote;

pub use country::Country;
pub use geo::{BoundaryState, Feature, FeatureCollection, Geometry, Position, Ring};
pub use globe::{DataTab, GlobePose, PoseTransform};
pub use remote::{CountryStatistics, CountrySummary, FetchState};
