// src/export/logic.rs

use crate::core::balance::yearly_balance;
use crate::core::calendar::HolidayCalendar;
use crate::db::pool::DbPool;
use crate::db::queries::{list_employees, list_vacations};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::BalanceRow;
use crate::export::xlsx::export_xlsx;
use crate::models::employee::Employee;
use crate::models::vacation::Vacation;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export logic: one balance row per employee for one year.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &DbPool,
        calendar: &HolidayCalendar,
        format: ExportFormat,
        file: &str,
        year: i32,
        allowance: i32,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let employees = list_employees(pool)?;
        let vacations = list_vacations(pool)?;

        if employees.is_empty() {
            warning("No employees found, nothing to export.");
            return Ok(());
        }

        let rows = Self::build_rows(calendar, &employees, &vacations, year, allowance);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }

    /// Pure row construction, separated so tests can cover it without a DB.
    pub fn build_rows(
        calendar: &HolidayCalendar,
        employees: &[Employee],
        vacations: &[Vacation],
        year: i32,
        allowance: i32,
    ) -> Vec<BalanceRow> {
        employees
            .iter()
            .map(|emp| {
                let balance = yearly_balance(calendar, &emp.id, year, vacations, allowance);
                BalanceRow {
                    name: emp.name.clone(),
                    role: emp.role_label().to_string(),
                    year,
                    total_days: allowance,
                    used_days: balance.used,
                    remaining_days: balance.remaining,
                }
            })
            .collect()
    }
}
