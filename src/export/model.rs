// src/export/model.rs

use serde::Serialize;

/// Flat per-employee balance row: one row per employee in the export.
#[derive(Serialize, Clone, Debug)]
pub struct BalanceRow {
    pub name: String,
    pub role: String,
    pub year: i32,
    pub total_days: i32,
    pub used_days: u32,
    pub remaining_days: i32,
}

/// Headers for CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "name",
        "role",
        "year",
        "total_days",
        "used_days",
        "remaining_days",
    ]
}

pub(crate) fn row_to_cells(r: &BalanceRow) -> Vec<String> {
    vec![
        r.name.clone(),
        r.role.clone(),
        r.year.to_string(),
        r.total_days.to_string(),
        r.used_days.to_string(),
        r.remaining_days.to_string(),
    ]
}
