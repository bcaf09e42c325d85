use super::*;

#[test]
fn format_long_date_uses_english_month_names() {
    assert_eq!(format_long_date(2026, 10, 14).as_deref(), Some("October 14, 2026"));
    assert_eq!(format_long_date(2025, 1, 1).as_deref(), Some("January 1, 2025"));
    assert_eq!(format_long_date(2024, 12, 31).as_deref(), Some("December 31, 2024"));
}

#[test]
fn format_long_date_does_not_pad_day() {
    assert_eq!(format_long_date(2025, 5, 7).as_deref(), Some("May 7, 2025"));
}

#[test]
fn format_long_date_rejects_out_of_range_month() {
    assert_eq!(format_long_date(2025, 0, 1), None);
    assert_eq!(format_long_date(2025, 13, 1), None);
}

#[test]
fn format_long_date_rejects_out_of_range_day() {
    assert_eq!(format_long_date(2025, 6, 0), None);
    assert_eq!(format_long_date(2025, 6, 32), None);
}

#[test]
fn format_long_date_checks_days_per_month() {
    assert_eq!(format_long_date(2025, 2, 31), None);
    assert_eq!(format_long_date(2025, 4, 31), None);
    assert_eq!(format_long_date(2025, 4, 30).as_deref(), Some("April 30, 2025"));
}

#[test]
fn format_long_date_follows_leap_years() {
    assert_eq!(format_long_date(2024, 2, 29).as_deref(), Some("February 29, 2024"));
    assert_eq!(format_long_date(2025, 2, 29), None);
    assert_eq!(format_long_date(1900, 2, 29), None);
    assert_eq!(format_long_date(2000, 2, 29).as_deref(), Some("February 29, 2000"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn today_long_is_none_outside_browser() {
    assert_eq!(today_long(), None);
}
