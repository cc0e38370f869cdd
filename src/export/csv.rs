use crate::errors::{AppError, AppResult};
use crate::export::model::{BalanceRow, get_headers, row_to_cells};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

/// Write the balance rows as CSV.
pub(crate) fn export_csv(rows: &[BalanceRow], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;

    for row in rows {
        wtr.write_record(row_to_cells(row))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
