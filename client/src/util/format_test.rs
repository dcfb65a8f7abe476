use super::*;

#[test]
fn format_timestamp_trims_seconds_and_offset() {
    assert_eq!(format_timestamp("2025-03-15T10:04:59.123456+00:00"), "2025-03-15 10:04");
}

#[test]
fn format_timestamp_accepts_space_separator() {
    assert_eq!(format_timestamp("2024-12-01 08:30:00"), "2024-12-01 08:30");
}

#[test]
fn format_timestamp_passes_through_unknown_text() {
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp("2025/03/15 10:00:00"), "2025/03/15 10:00:00");
    assert_eq!(format_timestamp(""), "");
}

#[test]
fn display_timestamp_matches_plain_format_outside_browser() {
    assert_eq!(display_timestamp("2025-03-15T10:00:00Z"), "2025-03-15 10:00");
}

#[test]
fn or_na_substitutes_missing_values() {
    assert_eq!(or_na(None), "N/A");
    assert_eq!(or_na(Some("  ")), "N/A");
    assert_eq!(or_na(Some("Fix tap")), "Fix tap");
}
