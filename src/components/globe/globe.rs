//! Orthographic globe component.
//!
//! Renders one SVG path per boundary feature plus the outline circle. All
//! paths are recomputed from the [`GlobeCamera`] whenever it changes, which
//! happens on every drag / zoom event and on every frame of a rotation tween.

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_raf_fn;

use super::hooks::{BoundaryData, use_boundaries};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::GlobeConfig;
use crate::core::animation::Tween;
use crate::core::{DragTracker, GlobeCamera, PinchTracker, Rotation, geometry_path};
use crate::models::{BoundaryState, FeatureCollection, GlobePose, PoseTransform};
use crate::utils::dom::{now_ms, touch_distance};

stylance::import_crate_style!(css, "src/components/globe/globe.module.css");

/// Interactive globe.
///
/// # Props
/// - `config`: projection and gesture tuning
/// - `compact`: whether the stacked (narrow screen) layout is active
#[component]
pub fn Globe(
    #[prop(optional)] config: GlobeConfig,
    #[prop(into)] compact: Signal<bool>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let boundaries = use_boundaries();

    let camera = RwSignal::new(GlobeCamera::new(config));
    let pose = RwSignal::new(Tween::new(GlobePose::Initial.transform(compact.get_untracked())));

    // Frame loop: only touches the signals while something is in motion.
    let _frame_loop = use_raf_fn(move |_| {
        let now = now_ms();
        if camera.with_untracked(GlobeCamera::is_animating) {
            camera.update(|c| {
                c.tick(now);
            });
        }
        if pose.with_untracked(Tween::<PoseTransform>::is_animating) {
            pose.update(|p| {
                p.tick(now);
            });
        }
    });

    // Pose follows whether anything is selected (and the layout).
    let has_selection = Memo::new(move |_| ctx.selected.with(Option::is_some));
    Effect::new(move |_| {
        let target = GlobePose::for_selection(has_selection.get()).transform(compact.get());
        let duration = config.transition_duration_ms();
        pose.update(|p| p.retarget(target, now_ms(), duration));
    });

    // Turn towards each newly selected country.
    Effect::new(move |_| {
        if let Some(rotation) = ctx.selected.with(|s| s.as_ref().map(|c| c.camera_rotation())) {
            camera.update(|c| c.rotate_to(Rotation::from_angles(rotation), now_ms()));
        }
    });

    let pose_style = move || pose.with(|p| p.value().to_style());

    view! {
        <div class=css::stage style=pose_style>
            {move || match boundaries.state.get() {
                BoundaryState::Loading => view! {
                    <div class=css::status role="status">
                        <span class=css::spinner><Icon icon=ic::GLOBE /></span>
                        <span>"Loading map…"</span>
                    </div>
                }
                .into_any(),
                BoundaryState::Failed(message) => view! {
                    <MapUnavailable message=message boundaries=boundaries />
                }
                .into_any(),
                BoundaryState::Ready(features) => view! {
                    <GlobeSurface features=features camera=camera />
                }
                .into_any(),
            }}
        </div>
    }
}

/// Retryable failure view shown when the boundary dataset cannot be loaded.
#[component]
fn MapUnavailable(message: String, boundaries: BoundaryData) -> impl IntoView {
    view! {
        <div class=css::status role="alert">
            <p class=css::statusTitle>"Map unavailable"</p>
            <p class=css::statusDetail>{message}</p>
            <button class=css::retryButton on:click=move |_| boundaries.retry()>
                <Icon icon=ic::RETRY />
                <span>"Retry"</span>
            </button>
        </div>
    }
}

/// The SVG globe with its gesture handlers.
#[component]
fn GlobeSurface(features: Arc<FeatureCollection>, camera: RwSignal<GlobeCamera>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (width, height) = camera.with_untracked(|c| (c.config().viewport[0], c.config().viewport[1]));
    let [cx, cy] = camera.with_untracked(|c| c.config().center());

    let drag = StoredValue::new(DragTracker::default());
    let pinch = StoredValue::new(PinchTracker::default());

    // --- pointer drag ---------------------------------------------------------

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if !ev.is_primary() || pinch.get_value().is_active() {
            return;
        }
        let mut tracker = drag.get_value();
        tracker.press([f64::from(ev.client_x()), f64::from(ev.client_y())]);
        drag.set_value(tracker);
    };

    let on_pointer_move = move |ev: ev::PointerEvent| {
        let mut tracker = drag.get_value();
        if !tracker.is_active() {
            return;
        }
        let delta = tracker.move_to([f64::from(ev.client_x()), f64::from(ev.client_y())]);
        drag.set_value(tracker);
        if let Some((dx, dy)) = delta {
            camera.update(|c| c.drag(dx, dy));
        }
    };

    let on_pointer_end = move |_: ev::PointerEvent| {
        let mut tracker = drag.get_value();
        tracker.release();
        drag.set_value(tracker);
    };

    // --- wheel / pinch zoom ---------------------------------------------------

    let on_wheel = move |ev: ev::WheelEvent| {
        ev.prevent_default();
        // Line and page deltas (Firefox) are converted to px.
        let delta_px = match ev.delta_mode() {
            web_sys::WheelEvent::DOM_DELTA_LINE => ev.delta_y() * 40.0,
            web_sys::WheelEvent::DOM_DELTA_PAGE => ev.delta_y() * 800.0,
            _ => ev.delta_y(),
        };
        camera.update(|c| {
            c.wheel(delta_px);
        });
    };

    let on_touch_move = move |ev: ev::TouchEvent| {
        let Some(distance) = touch_distance(&ev) else {
            return;
        };
        ev.prevent_default();

        // A second finger turns the gesture into a pinch.
        let mut tracker = drag.get_value();
        tracker.release();
        drag.set_value(tracker);

        let mut tracker = pinch.get_value();
        let ratio = tracker.update(distance);
        pinch.set_value(tracker);
        if let Some(ratio) = ratio {
            camera.update(|c| {
                c.zoom_by(ratio);
            });
        }
    };

    let on_touch_end = move |ev: ev::TouchEvent| {
        if ev.touches().length() < 2 {
            let mut tracker = pinch.get_value();
            tracker.end();
            pinch.set_value(tracker);
        }
    };

    // --- country paths --------------------------------------------------------

    let paths = (0..features.len())
        .map(|index| {
            let features = Arc::clone(&features);
            let feature = &features.features[index];
            let id = feature.id.clone();
            let label = feature.name.clone().unwrap_or_else(|| id.clone());
            let selected_id = id.clone();

            let d = {
                let features = Arc::clone(&features);
                move || camera.with(|c| geometry_path(&features.features[index].geometry, c.projection()))
            };
            let class = move || {
                let selected = ctx.selected.with(|s| s.as_ref().is_some_and(|c| c.id == selected_id));
                if selected {
                    format!("{} {}", css::country, css::countrySelected)
                } else {
                    css::country.to_string()
                }
            };
            let on_click = move |_: ev::MouseEvent| {
                let mut tracker = drag.get_value();
                let honoured = tracker.take_click();
                drag.set_value(tracker);
                if honoured {
                    ctx.select_feature(&id);
                }
            };

            view! {
                <path
                    class=class
                    d=d
                    data-id=feature.id.clone()
                    aria-label=label
                    on:click=on_click
                />
            }
        })
        .collect_view();

    view! {
        <svg
            class=css::globe
            viewBox=format!("0 0 {width} {height}")
            role="img"
            aria-label="World globe"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:pointerleave=on_pointer_end
            on:wheel=on_wheel
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_end
        >
            <circle class=css::ocean cx=cx cy=cy r=move || camera.with(GlobeCamera::radius) />
            {paths}
        </svg>
    }
}
