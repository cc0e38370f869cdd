use crate::utils::date::parse_date;
use chrono::NaiveDate;
use serde::Serialize;

/// A vacation period, bounds inclusive.
///
/// Dates are stored as ISO `YYYY-MM-DD` strings; on that fixed-width format
/// lexicographic order equals chronological order, so range comparisons work
/// directly on the strings.
#[derive(Debug, Clone, Serialize)]
pub struct Vacation {
    pub id: String,
    pub employee_id: String,
    pub start_date: String,
    pub end_date: String,
}

impl Vacation {
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        parse_date(&self.end_date)
    }

    /// Inclusive-bounds overlap: a shared boundary day counts.
    pub fn overlaps(&self, other: &Vacation) -> bool {
        self.start_date <= other.end_date && self.end_date >= other.start_date
    }

    pub fn covers_day(&self, day_str: &str) -> bool {
        self.start_date.as_str() <= day_str && day_str <= self.end_date.as_str()
    }
}
