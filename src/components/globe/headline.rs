//! Page headline.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/globe/globe.module.css");

/// Splits the app name into its lead words and the emphasized last word.
fn title_parts(name: &str) -> (&str, String) {
    match name.rsplit_once(' ') {
        Some((lead, last)) => (lead, last.to_uppercase()),
        None => ("", name.to_uppercase()),
    }
}

/// Shows the app title with no selection, and the country name otherwise.
///
/// Each variant is a fresh element so the CSS enter animation replays.
#[component]
pub fn Headline() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (lead, accent) = title_parts(APP_NAME);

    view! {
        <header class=css::headline>
            {move || match ctx.selected.get() {
                Some(country) => view! {
                    <h1 class=css::countryName>{country.name}</h1>
                }
                .into_any(),
                None => {
                    let accent = accent.clone();
                    view! {
                        <h1 class=css::title>
                            <span class=css::titleLead>{lead}</span>
                            <span class=css::titleAccent>{accent}</span>
                        </h1>
                    }
                    .into_any()
                }
            }}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_parts() {
        assert_eq!(title_parts("Know Your World"), ("Know Your", "WORLD".to_string()));
        assert_eq!(title_parts("Globe"), ("", "GLOBE".to_string()));
    }
}
