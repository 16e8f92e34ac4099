//! World boundary dataset loading.

use serde_json::Value;

use crate::config::{api::BOUNDARIES_URL, cache::BOUNDARIES_KEY};
use crate::core::error::BoundaryError;
use crate::core::geojson::feature_collection_from_value;
use crate::models::FeatureCollection;
use crate::utils::{cache, fetch_json_cached};

/// Load the boundary dataset, from the session cache when available.
pub async fn load_boundaries() -> Result<FeatureCollection, BoundaryError> {
    fetch_json_cached::<Value, _, BoundaryError, _>(BOUNDARIES_URL, BOUNDARIES_KEY, |value| {
        feature_collection_from_value(&value).map_err(BoundaryError::from)
    })
    .await
}

/// Forget any cached copy so the next load hits the network.
pub fn invalidate_boundaries() {
    cache::remove(BOUNDARIES_KEY);
}
