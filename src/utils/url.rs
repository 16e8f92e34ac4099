//! URL construction for the external data services.

use crate::config::api::{STATISTICS_BASE_URL, SUMMARY_BASE_URL};

/// Encyclopedia path segment for an article title (spaces become `_`).
pub fn article_slug(title: &str) -> String {
    title.trim().replace(' ', "_")
}

/// Summary endpoint for an article title.
pub fn summary_url(title: &str) -> String {
    let encoded = js_sys::encode_uri_component(&article_slug(title));
    format!("{}{}", SUMMARY_BASE_URL, String::from(encoded))
}

/// Statistics endpoint for an alpha-2 or alpha-3 code.
pub fn statistics_url(alpha: &str) -> String {
    let encoded = js_sys::encode_uri_component(alpha.trim());
    format!("{}{}", STATISTICS_BASE_URL, String::from(encoded))
}

/// Accept only absolute `https` image sources from remote payloads.
pub fn safe_image_url(src: &str) -> Option<&str> {
    let src = src.trim();
    let rest = src.strip_prefix("https://")?;
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    (!host.is_empty()).then_some(src)
}
