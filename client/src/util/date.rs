//! Calendar date helpers for the page footer.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Format as `"October 14, 2026"`. `month` is 1-based; returns `None` when
/// the month or the day does not exist in that year.
#[must_use]
pub fn format_long_date(year: i32, month: u32, day: u32) -> Option<String> {
    let last_day = days_in_month(year, month)?;
    if day == 0 || day > last_day {
        return None;
    }
    let name = MONTHS[usize::try_from(month - 1).ok()?];
    Some(format!("{name} {day}, {year}"))
}

/// Today's date in the browser's local time zone, formatted for display.
pub fn today_long() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let year = i32::try_from(now.get_full_year()).ok()?;
        format_long_date(year, now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
