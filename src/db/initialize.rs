use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema. Idempotent: every open path runs through
/// here, so commands work on a fresh database without an explicit `init`.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS employees (
             id               TEXT PRIMARY KEY,
             name             TEXT NOT NULL,
             role             TEXT NOT NULL DEFAULT '',
             pin              TEXT NOT NULL DEFAULT '',
             incompatible_ids TEXT NOT NULL DEFAULT '[]'
         );
         CREATE TABLE IF NOT EXISTS vacations (
             id          TEXT PRIMARY KEY,
             employee_id TEXT NOT NULL,
             start_date  TEXT NOT NULL,
             end_date    TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS events (
             id                    TEXT PRIMARY KEY,
             name                  TEXT NOT NULL,
             start_date            TEXT NOT NULL,
             end_date              TEXT NOT NULL,
             is_global             INTEGER NOT NULL DEFAULT 0,
             assigned_employee_ids TEXT NOT NULL DEFAULT '[]'
         );",
    )?;
    Ok(())
}
