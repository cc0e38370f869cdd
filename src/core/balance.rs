//! Annual vacation balance aggregation.

use crate::core::calendar::HolidayCalendar;
use crate::core::workdays::count_working_days;
use crate::models::vacation::Vacation;
use crate::utils::date::year_bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    /// Working days consumed inside the queried year.
    pub used: u32,
    /// `allowance - used`. Negative means over-allocation and is surfaced
    /// as-is, never clamped.
    pub remaining: i32,
}

/// Sum the working days an employee's vacations consume inside `year`, and
/// derive the remaining balance against `allowance`.
///
/// A vacation straddling a year boundary is clamped to `[Jan 1, Dec 31]`
/// first, so only its in-year portion counts. Vacations with unparsable dates
/// contribute 0.
pub fn yearly_balance(
    calendar: &HolidayCalendar,
    employee_id: &str,
    year: i32,
    all_vacations: &[Vacation],
    allowance: i32,
) -> Balance {
    let Some((year_start, year_end)) = year_bounds(year) else {
        return Balance {
            used: 0,
            remaining: allowance,
        };
    };

    let mut used: u32 = 0;

    for vacation in all_vacations.iter().filter(|v| v.employee_id == employee_id) {
        let (Some(start), Some(end)) = (vacation.start(), vacation.end()) else {
            continue;
        };

        let overlap_start = start.max(year_start);
        let overlap_end = end.min(year_end);

        if overlap_start <= overlap_end {
            used += count_working_days(calendar, overlap_start, overlap_end);
        }
    }

    Balance {
        used,
        remaining: allowance - used as i32,
    }
}
