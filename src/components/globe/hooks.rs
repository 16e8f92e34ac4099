//! Boundary dataset hook.

use std::sync::Arc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::core::boundary::{invalidate_boundaries, load_boundaries};
use crate::models::BoundaryState;

/// Reactive handle on the boundary dataset.
#[derive(Clone, Copy)]
pub struct BoundaryData {
    pub state: RwSignal<BoundaryState>,
}

impl BoundaryData {
    /// Drop the cached dataset and request it again.
    pub fn retry(&self) {
        if self.state.with_untracked(BoundaryState::is_loading) {
            return;
        }
        invalidate_boundaries();
        self.state.set(BoundaryState::Loading);
        self.load();
    }

    fn load(&self) {
        let state = self.state;
        spawn_local(async move {
            let next = match load_boundaries().await {
                Ok(collection) => {
                    log::info!("loaded {} boundary features", collection.len());
                    BoundaryState::Ready(Arc::new(collection))
                }
                Err(e) => {
                    log::error!("boundary dataset unavailable: {e}");
                    BoundaryState::Failed(e.to_string())
                }
            };
            // The globe may have been unmounted while the request was in flight.
            let _ = state.try_set(next);
        });
    }
}

/// Start loading the boundary dataset and expose its load state.
///
/// Call once per globe; the dataset is served from the session cache after
/// the first successful load.
pub fn use_boundaries() -> BoundaryData {
    let data = BoundaryData {
        state: RwSignal::new(BoundaryState::Loading),
    };
    data.load();
    data
}
