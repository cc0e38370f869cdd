//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.
//!
//! Degenerate engine inputs (inverted ranges, dangling employee references)
//! are NOT errors; the engine returns defined zero/empty results for those.
//! Errors are reserved for the persistence, config, and export boundaries.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    #[error("Vacation not found: {0}")]
    VacationNotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Vacation conflicts with: {0}")]
    ConflictBlocked(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
