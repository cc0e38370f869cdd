use crate::errors::{AppError, AppResult};
use crate::export::model::BalanceRow;
use crate::export::notify_export_success;
use std::path::Path;

/// Write the balance rows as pretty-printed JSON.
pub(crate) fn export_json(rows: &[BalanceRow], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
