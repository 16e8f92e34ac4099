//! Formatting utilities for numeric panel values.

/// Group the digits of an integer with `,` every three places.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a number with `en-US` grouping and at most two fraction digits.
pub fn format_number_en(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc();
    let cents = ((rounded - whole) * 100.0).round() as u64;

    let mut out = format!("{sign}{}", group_digits(whole as u64));
    if cents > 0 {
        let frac = format!("{cents:02}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }
    out
}

/// Format a number with the browser locale's grouping.
///
/// Uses `Intl.NumberFormat` in the browser and falls back to `en-US`
/// grouping elsewhere.
pub fn format_number(value: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let formatter = js_sys::Intl::NumberFormat::new(&js_sys::Array::new(), &js_sys::Object::new());
        if let Some(text) = formatter
            .format()
            .call1(&wasm_bindgen::JsValue::NULL, &wasm_bindgen::JsValue::from_f64(value))
            .ok()
            .and_then(|v| v.as_string())
        {
            return text;
        }
    }
    format_number_en(value)
}

/// Format an optional statistic; missing values render as an em dash.
pub fn format_statistic(value: Option<f64>) -> String {
    value.map(format_number).unwrap_or_else(|| "—".to_string())
}
