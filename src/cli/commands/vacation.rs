use crate::cli::parser::VacationAction;
use crate::config::{Config, ConflictPolicy};
use crate::core::calendar::HolidayCalendar;
use crate::core::conflicts::detect_conflict;
use crate::core::workdays::count_working_days_str;
use crate::db;
use crate::db::pool::DbPool;
use crate::db::queries::{
    delete_vacation, get_employee, insert_vacation, list_employees, list_vacations,
    update_vacation, vacation_exists,
};
use crate::errors::{AppError, AppResult};
use crate::models::vacation::Vacation;
use crate::ui::messages::{success, warning};
use crate::utils::date::{iso, parse_date};
use crate::utils::id;
use crate::utils::table::Table;

pub fn handle(action: &VacationAction, cfg: &Config) -> AppResult<()> {
    let pool = db::open(cfg)?;

    match action {
        VacationAction::Add {
            employee,
            from,
            to,
            id: explicit_id,
            force,
        } => {
            add_or_update(&pool, cfg, employee, from, to, explicit_id.as_deref(), *force)?;
        }

        VacationAction::List { employee } => {
            let calendar = HolidayCalendar::standard();
            let vacations = list_vacations(&pool)?;

            let mut table = Table::new(["ID", "EMPLOYEE", "FROM", "TO", "WORKDAYS"]);
            for v in vacations.iter().filter(|v| match employee {
                Some(emp_id) => &v.employee_id == emp_id,
                None => true,
            }) {
                table.add_row(vec![
                    v.id.clone(),
                    v.employee_id.clone(),
                    v.start_date.clone(),
                    v.end_date.clone(),
                    count_working_days_str(&calendar, &v.start_date, &v.end_date).to_string(),
                ]);
            }

            if table.is_empty() {
                println!("No vacations found.");
            } else {
                print!("{}", table.render());
            }
        }

        VacationAction::Del { id } => {
            delete_vacation(&pool, id)?;
            success(format!("Vacation {id} deleted"));
        }
    }

    Ok(())
}

/// Validate, detect conflicts, apply the configured policy, then persist.
fn add_or_update(
    pool: &DbPool,
    cfg: &Config,
    employee: &str,
    from: &str,
    to: &str,
    explicit_id: Option<&str>,
    force: bool,
) -> AppResult<()> {
    // Dates must be real ISO dates at the storage boundary, normalized so the
    // string comparisons downstream stay chronological.
    let start = parse_date(from).ok_or_else(|| AppError::InvalidDate(from.to_string()))?;
    let end = parse_date(to).ok_or_else(|| AppError::InvalidDate(to.to_string()))?;

    if start > end {
        return Err(AppError::InvalidRange(format!("{from} is after {to}")));
    }

    // The owner must exist to save (conflict detection alone would just skip).
    get_employee(pool, employee)?;

    let vacation = Vacation {
        id: explicit_id
            .map(str::to_string)
            .unwrap_or_else(|| id::generate("vac")),
        employee_id: employee.to_string(),
        start_date: iso(start),
        end_date: iso(end),
    };

    let all_vacations = list_vacations(pool)?;
    let all_employees = list_employees(pool)?;

    let report = detect_conflict(&vacation, &all_vacations, &all_employees);

    if report.has_conflict() {
        let names = report.names().join(", ");

        match cfg.conflict_policy {
            ConflictPolicy::Block => {
                return Err(AppError::ConflictBlocked(names));
            }
            ConflictPolicy::Warn => {
                warning(format!("Conflict detected with: {names}"));
                if !force {
                    warning("Vacation NOT saved. Re-run with --force to save anyway.");
                    return Ok(());
                }
            }
        }
    }

    if vacation_exists(pool, &vacation.id)? {
        update_vacation(pool, &vacation)?;
        success(format!("Vacation {} updated", vacation.id));
    } else {
        insert_vacation(pool, &vacation)?;
        success(format!(
            "Vacation {} saved for {} ({} → {})",
            vacation.id, vacation.employee_id, vacation.start_date, vacation.end_date
        ));
    }

    Ok(())
}
