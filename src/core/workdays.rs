//! Working-day counting over inclusive date ranges.

use crate::core::calendar::HolidayCalendar;
use crate::utils::date::parse_date;
use chrono::{Datelike, NaiveDate, Weekday};

/// Count the days in `[start, end]` (inclusive) that are neither Saturday,
/// Sunday, nor a holiday in `calendar`.
///
/// An inverted range (`start > end`) is a defined degenerate input and counts
/// as 0, not an error.
pub fn count_working_days(calendar: &HolidayCalendar, start: NaiveDate, end: NaiveDate) -> u32 {
    if start > end {
        return 0;
    }

    let mut count = 0;
    let mut day = start;

    while day <= end {
        let weekend = matches!(day.weekday(), Weekday::Sat | Weekday::Sun);
        if !weekend && !calendar.is_holiday_date(day) {
            count += 1;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    count
}

/// String-boundary variant: dates arrive as `YYYY-MM-DD`. Anything that does
/// not parse counts as 0.
pub fn count_working_days_str(calendar: &HolidayCalendar, start: &str, end: &str) -> u32 {
    match (parse_date(start), parse_date(end)) {
        (Some(s), Some(e)) => count_working_days(calendar, s, e),
        _ => 0,
    }
}
