//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get sessionStorage.
#[inline]
pub fn session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

/// Milliseconds since the epoch, used as the animation clock.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Distance in px between the first two touches of a touch event.
pub fn touch_distance(event: &web_sys::TouchEvent) -> Option<f64> {
    let touches = event.touches();
    if touches.length() < 2 {
        return None;
    }
    let a = touches.get(0)?;
    let b = touches.get(1)?;
    let dx = f64::from(a.client_x() - b.client_x());
    let dy = f64::from(a.client_y() - b.client_y());
    Some(dx.hypot(dy))
}
