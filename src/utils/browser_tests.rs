//! Tests that need a browser (`wasm-pack test --headless --firefox`).

use wasm_bindgen_test::*;

use super::format::format_number;
use super::url::{statistics_url, summary_url};
use crate::config::api::{STATISTICS_BASE_URL, SUMMARY_BASE_URL};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_summary_url_encoding() {
    assert_eq!(
        summary_url("Georgia (country)"),
        format!("{SUMMARY_BASE_URL}Georgia_(country)")
    );
    assert_eq!(
        summary_url("Côte d'Ivoire"),
        format!("{SUMMARY_BASE_URL}C%C3%B4te_d'Ivoire")
    );
}

#[wasm_bindgen_test]
fn test_statistics_url() {
    assert_eq!(statistics_url("FRA"), format!("{STATISTICS_BASE_URL}FRA"));
}

#[wasm_bindgen_test]
fn test_intl_grouping_keeps_digits() {
    let text = format_number(67_000_000.0);
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    assert_eq!(digits, "67000000");
    assert!(text.chars().count() > digits.len(), "expected separators in {text}");
}
