//! Root application module.
//!
//! Contains the main App component and the AppContext holding the one piece
//! of cross-component state: the selected country.

use leptos::prelude::*;

use crate::components::Home;
use crate::core::catalog;
use crate::models::Country;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree. The globe writes the
/// selection when a country path is clicked; the detail panel clears it.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently selected country, if any.
    pub selected: RwSignal<Option<Country>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(None),
        }
    }

    /// Select the country behind a clicked feature id.
    ///
    /// Unknown ids leave the selection untouched. Returns whether the
    /// selection changed.
    pub fn select_feature(&self, feature_id: &str) -> bool {
        match catalog::resolve_feature(feature_id) {
            Some(country) => {
                log::debug!("selected {} ({})", country.name, country.id);
                self.selected.set(Some(country.clone()));
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&self) {
        self.selected.set(None);
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the globe page
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #05070f;
                    color: #e0e0e0;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #ff6b6b; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a0a0a0; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #101627;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6c7a89;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #ff6b6b;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #4a90e2;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-family: system-ui, sans-serif;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <Home />
        </ErrorBoundary>
    }
}
