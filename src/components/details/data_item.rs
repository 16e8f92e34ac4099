//! Expandable data tab.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::DetailsData;
use crate::components::icons as ic;
use crate::models::DataTab;

stylance::import_crate_style!(css, "src/components/details/details.module.css");

/// One tab of the detail panel.
///
/// Collapsed, the whole header expands it. Expanded, it shows its children
/// and a close button that collapses every tab.
#[component]
pub fn DataItem(tab: DataTab, icon: IconData, data: DetailsData, children: ChildrenFn) -> impl IntoView {
    let is_open = Memo::new(move |_| data.is_open(tab));

    let class = move || {
        if is_open.get() {
            format!("{} {}", css::item, css::itemOpen)
        } else {
            css::item.to_string()
        }
    };

    view! {
        <section class=class>
            <div class=css::itemHeader>
                <button
                    class=css::itemToggle
                    aria-expanded=move || is_open.get().to_string()
                    on:click=move |_| {
                        if !is_open.get_untracked() {
                            data.open_tab(tab);
                        }
                    }
                >
                    <Icon icon=icon />
                    <span class=css::itemTitle>{tab.title()}</span>
                    <Show when=move || !is_open.get()>
                        <span class=css::itemExpand><Icon icon=ic::EXPAND /></span>
                    </Show>
                </button>
                <Show when=move || is_open.get()>
                    <button
                        class=css::itemClose
                        title="Collapse"
                        aria-label=format!("Collapse {}", tab.title())
                        on:click=move |_| data.close_tab()
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </Show>
            </div>
            {move || is_open.get().then(|| view! { <div class=css::itemBody>{children()}</div> })}
        </section>
    }
}
