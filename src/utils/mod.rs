//! Utility modules for web, DOM and formatting operations.
//!
//! Provides:
//! - [`fetch_json_with_retry`], [`fetch_json_cached`] - Network fetching with timeout, retry and caching
//! - [`cache`], [`dom`] - sessionStorage and browser helpers
//! - [`format`] - Locale-aware number formatting
//! - [`url`] - External service endpoints

pub mod cache;
pub mod dom;
mod fetch;
pub mod format;
pub mod url;

pub use fetch::{fetch_json_cached, fetch_json_with_retry};

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;
