//! Holiday calendar lookup.
//!
//! The calendar is a value built once at startup and passed to whatever needs
//! it, so tests can substitute an alternate table. Lookup is an exact string
//! match on `YYYY-MM-DD`; dates outside the covered years are simply not
//! holidays.

use chrono::NaiveDate;
use std::collections::HashMap;

/// Built-in table: Spanish / Andalusian public holidays, 2026-2030.
/// Entries marked "trasladado" are holidays observed on the following Monday
/// because the official date falls on a Sunday.
const STANDARD_HOLIDAYS: &[(&str, &str)] = &[
    ("2026-01-01", "Año Nuevo"),
    ("2026-01-06", "Epifanía del Señor"),
    ("2026-02-28", "Día de Andalucía"),
    ("2026-04-02", "Jueves Santo"),
    ("2026-04-03", "Viernes Santo"),
    ("2026-05-01", "Fiesta del Trabajo"),
    ("2026-08-15", "Asunción de la Virgen"),
    ("2026-10-12", "Fiesta Nacional de España"),
    ("2026-11-02", "Todos los Santos (trasladado)"),
    ("2026-12-07", "Día de la Constitución (trasladado)"),
    ("2026-12-08", "Inmaculada Concepción"),
    ("2026-12-25", "Natividad del Señor"),
    ("2027-01-01", "Año Nuevo"),
    ("2027-01-06", "Epifanía del Señor"),
    ("2027-03-01", "Día de Andalucía (trasladado)"),
    ("2027-03-25", "Jueves Santo"),
    ("2027-03-26", "Viernes Santo"),
    ("2027-05-01", "Fiesta del Trabajo"),
    ("2027-08-16", "Asunción de la Virgen (trasladado)"),
    ("2027-10-12", "Fiesta Nacional de España"),
    ("2027-11-01", "Todos los Santos"),
    ("2027-12-06", "Día de la Constitución"),
    ("2027-12-08", "Inmaculada Concepción"),
    ("2027-12-25", "Natividad del Señor"),
    ("2028-01-01", "Año Nuevo"),
    ("2028-01-06", "Epifanía del Señor"),
    ("2028-02-28", "Día de Andalucía"),
    ("2028-04-13", "Jueves Santo"),
    ("2028-04-14", "Viernes Santo"),
    ("2028-05-01", "Fiesta del Trabajo"),
    ("2028-08-15", "Asunción de la Virgen"),
    ("2028-10-12", "Fiesta Nacional de España"),
    ("2028-11-01", "Todos los Santos"),
    ("2028-12-06", "Día de la Constitución"),
    ("2028-12-08", "Inmaculada Concepción"),
    ("2028-12-25", "Natividad del Señor"),
    ("2029-01-01", "Año Nuevo"),
    ("2029-01-06", "Epifanía del Señor"),
    ("2029-02-28", "Día de Andalucía"),
    ("2029-03-29", "Jueves Santo"),
    ("2029-03-30", "Viernes Santo"),
    ("2029-05-01", "Fiesta del Trabajo"),
    ("2029-08-15", "Asunción de la Virgen"),
    ("2029-10-12", "Fiesta Nacional de España"),
    ("2029-11-01", "Todos los Santos"),
    ("2029-12-06", "Día de la Constitución"),
    ("2029-12-08", "Inmaculada Concepción"),
    ("2029-12-25", "Natividad del Señor"),
    ("2030-01-01", "Año Nuevo"),
    ("2030-01-07", "Epifanía del Señor (trasladado)"),
    ("2030-02-28", "Día de Andalucía"),
    ("2030-04-18", "Jueves Santo"),
    ("2030-04-19", "Viernes Santo"),
    ("2030-05-01", "Fiesta del Trabajo"),
    ("2030-08-15", "Asunción de la Virgen"),
    ("2030-10-12", "Fiesta Nacional de España"),
    ("2030-11-01", "Todos los Santos"),
    ("2030-12-06", "Día de la Constitución"),
    ("2030-12-09", "Inmaculada Concepción (trasladado)"),
    ("2030-12-25", "Natividad del Señor"),
];

#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    by_date: HashMap<String, String>,
}

impl HolidayCalendar {
    /// Calendar with the built-in 2026-2030 holiday table.
    pub fn standard() -> Self {
        Self::from_pairs(
            STANDARD_HOLIDAYS
                .iter()
                .map(|(d, n)| (d.to_string(), n.to_string())),
        )
    }

    /// Empty calendar: every weekday is a working day.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            by_date: pairs.into_iter().collect(),
        }
    }

    /// Exact-string membership test on a `YYYY-MM-DD` date.
    pub fn is_holiday(&self, date_str: &str) -> bool {
        self.by_date.contains_key(date_str)
    }

    pub fn holiday_name(&self, date_str: &str) -> Option<&str> {
        self.by_date.get(date_str).map(String::as_str)
    }

    pub fn is_holiday_date(&self, date: NaiveDate) -> bool {
        self.is_holiday(&date.format("%Y-%m-%d").to_string())
    }

    /// All `(date, name)` entries, sorted by date. With `year` set, only that
    /// year's entries.
    pub fn entries(&self, year: Option<i32>) -> Vec<(String, String)> {
        let prefix = year.map(|y| format!("{y:04}-"));
        let mut out: Vec<(String, String)> = self
            .by_date
            .iter()
            .filter(|(d, _)| match &prefix {
                Some(p) => d.starts_with(p.as_str()),
                None => true,
            })
            .map(|(d, n)| (d.clone(), n.clone()))
            .collect();
        out.sort();
        out
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
