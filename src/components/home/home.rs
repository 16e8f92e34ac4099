//! Globe page: headline, globe and the detail panel.
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: globe shifts left on selection, panel on the right
//! - **Mobile (< 768px)**: globe shrinks and the panel stacks below it

use leptos::prelude::*;
use leptos_use::{use_media_query, use_raf_fn};

use crate::app::AppContext;
use crate::components::details::DetailsPanel;
use crate::components::globe::{Globe, Headline};
use crate::config::{APP_NAME, COMPACT_MEDIA_QUERY, GlobeConfig};
use crate::core::animation::AnimationController;
use crate::models::{Country, PoseTransform};
use crate::utils::dom::now_ms;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

/// Globe page component.
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let config = GlobeConfig::default();
    let compact = use_media_query(COMPACT_MEDIA_QUERY);

    let panel = RwSignal::new(AnimationController::new(
        PoseTransform::PANEL_HIDDEN,
        PoseTransform::PANEL_SHOWN,
        config.transition_duration_ms(),
    ));
    // Outlives the selection until the exit animation has finished.
    let shown_country = RwSignal::new(None::<Country>);

    Effect::new(move |_| {
        let selected = ctx.selected.get();
        set_document_title(selected.as_ref());
        let now = now_ms();
        match selected {
            Some(country) => {
                shown_country.set(Some(country));
                panel.update(|p| p.show(now));
            }
            None => panel.update(|p| p.hide(now)),
        }
    });

    let _frame_loop = use_raf_fn(move |_| {
        if !panel.with_untracked(AnimationController::is_animating) {
            return;
        }
        let now = now_ms();
        panel.update(|p| {
            p.tick(now);
        });
        if !panel.with_untracked(AnimationController::is_mounted) {
            shown_country.set(None);
        }
    });

    let panel_mounted = Memo::new(move |_| panel.with(AnimationController::is_mounted));
    let panel_style = Signal::derive(move || panel.with(|p| p.value().to_style()));

    let class = move || {
        if compact.get() {
            format!("{} {}", css::home, css::compact)
        } else {
            css::home.to_string()
        }
    };

    view! {
        <main class=class>
            <Headline />
            <div class=css::body>
                <Globe config=config compact=compact />
                <Show when=move || panel_mounted.get()>
                    <DetailsPanel country=shown_country style=panel_style />
                </Show>
            </div>
        </main>
    }
}

fn set_document_title(selected: Option<&Country>) {
    let title = match selected {
        Some(country) => format!("{} · {}", country.name, APP_NAME),
        None => APP_NAME.to_string(),
    };
    document().set_title(&title);
}
