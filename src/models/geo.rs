//! Geographic boundary data types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// `[longitude, latitude]` in degrees.
pub type Position = [f64; 2];

/// Closed linear ring; the first and last positions are equal.
pub type Ring = Vec<Position>;

/// Area geometry of a feature. Only polygonal shapes are rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// Exterior ring followed by holes.
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Iterate every ring regardless of polygon nesting.
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            Self::Polygon(rings) => Box::new(rings.iter()),
            Self::MultiPolygon(polygons) => Box::new(polygons.iter().flatten()),
        }
    }
}

/// One labelled boundary shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub name: Option<String>,
    pub geometry: Geometry,
}

/// Parsed boundary dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }
}

/// Load state of the boundary dataset.
#[derive(Clone, Debug, Default)]
pub enum BoundaryState {
    #[default]
    Loading,
    Ready(Arc<FeatureCollection>),
    /// Load failed; the message is shown next to the retry action.
    Failed(String),
}

impl BoundaryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(origin: f64) -> Ring {
        vec![
            [origin, origin],
            [origin + 1.0, origin],
            [origin + 1.0, origin + 1.0],
            [origin, origin],
        ]
    }

    #[test]
    fn test_rings_flatten_multipolygon() {
        let geometry = Geometry::MultiPolygon(vec![vec![square(0.0)], vec![square(5.0), square(6.0)]]);
        assert_eq!(geometry.rings().count(), 3);
    }

    #[test]
    fn test_boundary_state_loading() {
        assert!(BoundaryState::default().is_loading());
        assert!(!BoundaryState::Failed("offline".into()).is_loading());

        let collection = FeatureCollection {
            features: vec![Feature {
                id: "FRA".into(),
                name: Some("France".into()),
                geometry: Geometry::Polygon(vec![square(0.0)]),
            }],
        };
        let state = BoundaryState::Ready(Arc::new(collection));
        assert!(!state.is_loading());
        match state {
            BoundaryState::Ready(features) => assert_eq!(features.len(), 1),
            other => panic!("expected ready state, got {other:?}"),
        }
    }
}
