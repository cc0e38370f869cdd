use crate::core::incompat::IncompatPatch;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, Role};
use crate::models::event::CompanyEvent;
use crate::models::vacation::Vacation;
use rusqlite::{Result, Row, params};

/// Id lists are stored as JSON arrays in a TEXT column.
fn parse_id_list(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

fn id_list_to_json(ids: &[String]) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

// ---------------------------
// Employees
// ---------------------------

pub fn map_employee_row(row: &Row) -> Result<Employee> {
    let role_str: String = row.get("role")?;
    let ids_raw: String = row.get("incompatible_ids")?;

    Ok(Employee {
        id: row.get("id")?,
        name: row.get("name")?,
        role: Role::from_code(&role_str),
        pin: row.get("pin")?,
        incompatible_ids: parse_id_list(&ids_raw),
    })
}

pub fn list_employees(pool: &DbPool) -> AppResult<Vec<Employee>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM employees ORDER BY name ASC")?;

    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_employee(pool: &DbPool, id: &str) -> AppResult<Employee> {
    let mut stmt = pool.conn.prepare("SELECT * FROM employees WHERE id = ?1")?;

    let mut rows = stmt.query_map([id], map_employee_row)?;

    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::EmployeeNotFound(id.to_string())),
    }
}

pub fn insert_employee(pool: &DbPool, emp: &Employee) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO employees (id, name, role, pin, incompatible_ids)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            emp.id,
            emp.name,
            emp.role.map(|r| r.to_db_str()).unwrap_or(""),
            emp.pin,
            id_list_to_json(&emp.incompatible_ids),
        ],
    )?;
    Ok(())
}

pub fn update_employee(pool: &DbPool, emp: &Employee) -> AppResult<()> {
    let n = pool.conn.execute(
        "UPDATE employees
         SET name = ?1, role = ?2, pin = ?3, incompatible_ids = ?4
         WHERE id = ?5",
        params![
            emp.name,
            emp.role.map(|r| r.to_db_str()).unwrap_or(""),
            emp.pin,
            id_list_to_json(&emp.incompatible_ids),
            emp.id,
        ],
    )?;
    if n == 0 {
        return Err(AppError::EmployeeNotFound(emp.id.clone()));
    }
    Ok(())
}

/// Apply one incompatibility reconciliation patch. Kept separate from
/// `update_employee` so a patch failure identifies the affected employee.
pub fn apply_incompat_patch(pool: &DbPool, patch: &IncompatPatch) -> AppResult<()> {
    let n = pool.conn.execute(
        "UPDATE employees SET incompatible_ids = ?1 WHERE id = ?2",
        params![id_list_to_json(&patch.incompatible_ids), patch.employee_id],
    )?;
    if n == 0 {
        return Err(AppError::EmployeeNotFound(patch.employee_id.clone()));
    }
    Ok(())
}

/// Delete an employee and cascade to that employee's vacations.
/// Incompatibility entries in other employees' lists are left dangling; the
/// conflict detector treats them as "employee not found".
pub fn delete_employee(pool: &DbPool, id: &str) -> AppResult<usize> {
    let vacations_removed = pool
        .conn
        .execute("DELETE FROM vacations WHERE employee_id = ?1", [id])?;

    let n = pool.conn.execute("DELETE FROM employees WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::EmployeeNotFound(id.to_string()));
    }
    Ok(vacations_removed)
}

// ---------------------------
// Vacations
// ---------------------------

pub fn map_vacation_row(row: &Row) -> Result<Vacation> {
    Ok(Vacation {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
    })
}

pub fn list_vacations(pool: &DbPool) -> AppResult<Vec<Vacation>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM vacations ORDER BY start_date ASC")?;

    let rows = stmt.query_map([], map_vacation_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_vacation(pool: &DbPool, vacation: &Vacation) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO vacations (id, employee_id, start_date, end_date)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            vacation.id,
            vacation.employee_id,
            vacation.start_date,
            vacation.end_date,
        ],
    )?;
    Ok(())
}

pub fn update_vacation(pool: &DbPool, vacation: &Vacation) -> AppResult<()> {
    let n = pool.conn.execute(
        "UPDATE vacations
         SET employee_id = ?1, start_date = ?2, end_date = ?3
         WHERE id = ?4",
        params![
            vacation.employee_id,
            vacation.start_date,
            vacation.end_date,
            vacation.id,
        ],
    )?;
    if n == 0 {
        return Err(AppError::VacationNotFound(vacation.id.clone()));
    }
    Ok(())
}

pub fn vacation_exists(pool: &DbPool, id: &str) -> AppResult<bool> {
    let mut stmt = pool.conn.prepare("SELECT 1 FROM vacations WHERE id = ?1")?;
    Ok(stmt.exists([id])?)
}

pub fn delete_vacation(pool: &DbPool, id: &str) -> AppResult<()> {
    let n = pool.conn.execute("DELETE FROM vacations WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::VacationNotFound(id.to_string()));
    }
    Ok(())
}

// ---------------------------
// Events
// ---------------------------

pub fn map_event_row(row: &Row) -> Result<CompanyEvent> {
    let ids_raw: String = row.get("assigned_employee_ids")?;

    Ok(CompanyEvent {
        id: row.get("id")?,
        name: row.get("name")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
        is_global: row.get::<_, i32>("is_global")? == 1,
        assigned_employee_ids: parse_id_list(&ids_raw),
    })
}

pub fn list_events(pool: &DbPool) -> AppResult<Vec<CompanyEvent>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM events ORDER BY start_date ASC")?;

    let rows = stmt.query_map([], map_event_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_event(pool: &DbPool, event: &CompanyEvent) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO events (id, name, start_date, end_date, is_global, assigned_employee_ids)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            event.id,
            event.name,
            event.start_date,
            event.end_date,
            if event.is_global { 1 } else { 0 },
            id_list_to_json(&event.assigned_employee_ids),
        ],
    )?;
    Ok(())
}

pub fn delete_event(pool: &DbPool, id: &str) -> AppResult<()> {
    let n = pool.conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
    if n == 0 {
        return Err(AppError::EventNotFound(id.to_string()));
    }
    Ok(())
}
