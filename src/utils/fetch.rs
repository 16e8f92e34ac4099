//! Network fetching utilities with timeout support.
//!
//! Provides async fetch functions with timeout racing, retry and caching.

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Promise};
use serde::{Serialize, de::DeserializeOwned};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::core::retry::{RetryPolicy, retry_with_backoff};
use crate::utils::cache;

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

// =============================================================================
// Fetch Functions
// =============================================================================

/// Fetch and parse JSON from a URL.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let text = fetch_url(url).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

/// Fetch JSON, retrying transient failures with exponential backoff.
pub async fn fetch_json_with_retry<T: DeserializeOwned>(
    url: &str,
    policy: RetryPolicy,
) -> Result<T, FetchError> {
    retry_with_backoff(
        policy,
        || fetch_json::<T>(url),
        |ms| TimeoutFuture::new(ms),
    )
    .await
}

/// Fetch, convert and cache a value for the current browser session.
///
/// The cached value is the converted one, so the conversion only runs on the
/// first load of the session. Cache is cleared when the tab is closed.
pub async fn fetch_json_cached<R, T, E, F>(url: &str, cache_key: &str, convert: F) -> Result<T, E>
where
    R: DeserializeOwned,
    T: DeserializeOwned + Serialize,
    E: From<FetchError>,
    F: FnOnce(R) -> Result<T, E>,
{
    if let Some(cached) = cache::get::<T>(cache_key) {
        log::debug!("{cache_key}: served from session cache");
        return Ok(cached);
    }

    let raw = fetch_json::<R>(url).await?;
    let data = convert(raw)?;

    // Caching is best-effort; large payloads may exceed the storage quota.
    if let Err(e) = cache::set(cache_key, &data) {
        log::debug!("{cache_key}: not cached ({e:?})");
    }

    Ok(data)
}

/// Fetch text from a URL using the Fetch API with timeout.
///
/// Uses [`race_with_timeout`]; a request slower than `FETCH_TIMEOUT_MS`
/// yields `FetchError::Timeout`.
async fn fetch_url(url: &str) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let fetch_promise = window.fetch_with_request(&request);

    match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(result) => {
            let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;

            if !resp.ok() {
                return Err(FetchError::HttpError(resp.status()));
            }

            let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
                .await
                .map_err(|_| FetchError::ResponseReadFailed)?;

            text.as_string().ok_or(FetchError::InvalidContent)
        }
    }
}
