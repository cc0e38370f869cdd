// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::io;
use std::path::Path;

/// Refuse to overwrite an existing output file unless `force` is set.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::from(io::Error::other(format!(
        "The file '{}' already exists. Use --force to overwrite.",
        path.display()
    ))))
}
