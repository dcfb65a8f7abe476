//! Display formatting for backend values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Render an ISO 8601 timestamp as `YYYY-MM-DD HH:MM`.
///
/// Accepts either `T` or a space as the date/time separator and ignores
/// seconds, fractions and offsets. Anything unrecognized is returned as-is.
pub fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    let bytes = raw.as_bytes();
    if bytes.len() < 16 {
        return raw.to_owned();
    }
    let digits_at = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    let shape_ok = digits_at(0..4)
        && bytes[4] == b'-'
        && digits_at(5..7)
        && bytes[7] == b'-'
        && digits_at(8..10)
        && (bytes[10] == b'T' || bytes[10] == b' ')
        && digits_at(11..13)
        && bytes[13] == b':'
        && digits_at(14..16);
    if !shape_ok {
        return raw.to_owned();
    }
    format!("{} {}", &raw[..10], &raw[11..16])
}

/// Render a timestamp in the browser's locale, falling back to
/// [`format_timestamp`] when the browser cannot parse it (or during SSR).
pub fn display_timestamp(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if !date.get_time().is_nan() {
            return String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED));
        }
    }
    format_timestamp(raw)
}

/// Caption for an optional field, `N/A` when absent.
pub fn or_na(value: Option<&str>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or("N/A").to_owned()
}
