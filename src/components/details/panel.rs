//! Detail panel component.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::data_item::DataItem;
use super::{DetailsData, use_country_details};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::statistics_rows;
use crate::models::{Country, DataTab, FetchState};
use crate::utils::url::safe_image_url;

stylance::import_crate_style!(css, "src/components/details/details.module.css");

/// Side panel with data about the selected country.
///
/// # Props
/// - `country`: country shown in the header; kept through the exit animation
/// - `style`: animated inline transform
#[component]
pub fn DetailsPanel(
    #[prop(into)] country: Signal<Option<Country>>,
    #[prop(into)] style: Signal<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let data = use_country_details();

    let name = move || country.with(|c| c.as_ref().map(|c| c.name.clone()).unwrap_or_default());

    view! {
        <aside
            class=css::panel
            style=move || style.get()
            role="complementary"
            aria-label="Country details"
        >
            <header class=css::header>
                <PanelThumbnail data=data />
                <h2 class=css::name>
                    <Icon icon=ic::LOCATION />
                    <span>{name}</span>
                </h2>
                <button
                    class=css::closeButton
                    on:click=move |_| ctx.clear_selection()
                    title="Close"
                    aria-label="Close country details"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </header>

            <div class=css::items>
                <DataItem tab=DataTab::Statistics icon=ic::STATISTICS data=data>
                    <StatisticsBody data=data />
                </DataItem>
                <DataItem tab=DataTab::Summary icon=ic::SUMMARY data=data>
                    <SummaryBody data=data />
                </DataItem>
            </div>
        </aside>
    }
}

/// Summary thumbnail, once loaded and only from an `https` source.
#[component]
fn PanelThumbnail(data: DetailsData) -> impl IntoView {
    let src = move || {
        data.state.with(|s| {
            s.summary
                .loaded()
                .and_then(|summary| summary.thumbnail.as_ref())
                .and_then(|thumb| safe_image_url(&thumb.source))
                .map(str::to_string)
        })
    };

    move || src().map(|src| view! { <img class=css::thumbnail src=src alt="" /> })
}

#[component]
fn SummaryBody(data: DetailsData) -> impl IntoView {
    move || {
        data.state.with(|s| match &s.summary {
            FetchState::Idle => ().into_any(),
            FetchState::Loading => view! { <p class=css::loading>"Loading…"</p> }.into_any(),
            FetchState::Failed(reason) => view! {
                <p class=css::error title=reason.clone()>"Summary not available."</p>
            }
            .into_any(),
            FetchState::Loaded(summary) => view! {
                <p class=css::extract>{summary.extract.clone()}</p>
            }
            .into_any(),
        })
    }
}

#[component]
fn StatisticsBody(data: DetailsData) -> impl IntoView {
    move || {
        data.state.with(|s| match &s.statistics {
            FetchState::Idle => ().into_any(),
            FetchState::Loading => view! { <p class=css::loading>"Loading…"</p> }.into_any(),
            FetchState::Failed(reason) => view! {
                <p class=css::error title=reason.clone()>"Statistics not available."</p>
            }
            .into_any(),
            FetchState::Loaded(stats) => {
                let rows = statistics_rows(stats)
                    .into_iter()
                    .map(|(label, value)| {
                        view! {
                            <div class=css::stat>
                                <dt class=css::statLabel>{label}": "</dt>
                                <dd class=css::statValue>{value}</dd>
                            </div>
                        }
                    })
                    .collect_view();
                view! { <dl class=css::stats>{rows}</dl> }.into_any()
            }
        })
    }
}
