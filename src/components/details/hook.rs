//! Detail data hook.
//!
//! Issues the summary and statistics requests for every newly selected
//! country. Each request carries the [`RequestTicket`] handed out when it was
//! issued; a response whose ticket is no longer current is dropped.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::error::FetchError;
use crate::core::retry::RetryPolicy;
use crate::core::{DetailsState, RequestTicket};
use crate::models::DataTab;
use crate::utils::fetch_json_with_retry;
use crate::utils::url::{statistics_url, summary_url};

/// Reactive handle on the detail panel state.
#[derive(Clone, Copy)]
pub struct DetailsData {
    pub state: RwSignal<DetailsState>,
}

impl DetailsData {
    pub fn is_open(&self, tab: DataTab) -> bool {
        self.state.with(|s| s.tabs.is_open(tab))
    }

    pub fn open_tab(&self, tab: DataTab) {
        self.state.update(|s| s.tabs.open(tab));
    }

    pub fn close_tab(&self) {
        self.state.update(|s| s.tabs.close());
    }
}

/// Track the selected country and keep its remote data loaded.
pub fn use_country_details() -> DetailsData {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = RwSignal::new(DetailsState::default());

    Effect::new(move |_| match ctx.selected.get() {
        Some(country) => {
            let Some(ticket) = state.try_update(|s| s.begin(&country)) else {
                return;
            };
            log::debug!("loading details for {}", country.id);

            spawn_fetch(
                state,
                ticket.clone(),
                summary_url(country.article_title()),
                "summary",
                DetailsState::resolve_summary,
            );
            if let Some(alpha) = &country.alpha {
                spawn_fetch(
                    state,
                    ticket,
                    statistics_url(alpha),
                    "statistics",
                    DetailsState::resolve_statistics,
                );
            }
        }
        None => state.update(DetailsState::clear),
    });

    DetailsData { state }
}

fn spawn_fetch<T, F>(
    state: RwSignal<DetailsState>,
    ticket: RequestTicket,
    url: String,
    what: &'static str,
    apply: F,
) where
    T: DeserializeOwned + 'static,
    F: FnOnce(&mut DetailsState, &RequestTicket, Result<T, FetchError>) -> bool + 'static,
{
    spawn_local(async move {
        let result = fetch_json_with_retry::<T>(&url, RetryPolicy::default()).await;
        if let Err(e) = &result {
            log::warn!("{what} for {} failed: {e}", ticket.country_id());
        }
        let applied = state
            .try_update(|s| apply(s, &ticket, result))
            .unwrap_or(false);
        if !applied {
            log::debug!("discarded stale {what} for {}", ticket.country_id());
        }
    });
}
