use crate::cli::parser::EmployeeAction;
use crate::config::Config;
use crate::core::incompat::reconcile_incompatibilities;
use crate::db;
use crate::db::queries::{
    apply_incompat_patch, delete_employee, get_employee, insert_employee, list_employees,
    update_employee,
};
use crate::errors::{AppError, AppResult};
use crate::models::employee::{Employee, Role};
use crate::ui::messages::{success, warning};
use crate::utils::id;
use crate::utils::table::Table;

pub fn handle(action: &EmployeeAction, cfg: &Config) -> AppResult<()> {
    let pool = db::open(cfg)?;

    match action {
        EmployeeAction::Add {
            name,
            role,
            pin,
            id: explicit_id,
        } => {
            let role_parsed = match role {
                Some(code) => Some(Role::from_code(code).ok_or_else(|| {
                    AppError::InvalidRole(format!(
                        "'{code}'. Use workshop, administration, management, or design"
                    ))
                })?),
                None => None,
            };

            let emp = Employee {
                id: explicit_id.clone().unwrap_or_else(|| id::generate("emp")),
                name: name.clone(),
                role: role_parsed,
                pin: pin.clone().unwrap_or_default(),
                incompatible_ids: Vec::new(),
            };

            insert_employee(&pool, &emp)?;
            success(format!("Employee '{}' added with id {}", emp.name, emp.id));
        }

        EmployeeAction::List => {
            let employees = list_employees(&pool)?;

            let mut table = Table::new(["ID", "NAME", "ROLE", "INCOMPATIBLE WITH"]);
            for emp in &employees {
                table.add_row(vec![
                    emp.id.clone(),
                    emp.name.clone(),
                    emp.role_label().to_string(),
                    emp.incompatible_ids.join(", "),
                ]);
            }

            if table.is_empty() {
                println!("No employees found.");
            } else {
                print!("{}", table.render());
            }
        }

        EmployeeAction::Del { id } => {
            let removed = delete_employee(&pool, id)?;
            success(format!(
                "Employee {id} deleted ({removed} vacation(s) removed)"
            ));
        }

        EmployeeAction::SetIncompat { of, with, off } => {
            set_incompatibility(&pool, of, with, !*off)?;
        }
    }

    Ok(())
}

/// Update `of`'s incompatibility list, then run the reconciliation pass so
/// the relation stays symmetric across all employees. Patch failures are
/// reported per employee and do not roll back the primary save.
fn set_incompatibility(
    pool: &db::pool::DbPool,
    of: &str,
    with: &str,
    enabled: bool,
) -> AppResult<()> {
    if of == with {
        return Err(AppError::Other(
            "an employee cannot be incompatible with themselves".to_string(),
        ));
    }

    let mut primary = get_employee(pool, of)?;
    // The peer must exist when enabling; removal tolerates a dangling id.
    if enabled {
        get_employee(pool, with)?;
    }

    let already = primary.incompatible_ids.iter().any(|i| i == with);
    if enabled && !already {
        primary.incompatible_ids.push(with.to_string());
    } else if !enabled && already {
        primary.incompatible_ids.retain(|i| i != with);
    }

    update_employee(pool, &primary)?;

    let all = list_employees(pool)?;
    let patches = reconcile_incompatibilities(&primary, &all);

    let mut failures = 0;
    for patch in &patches {
        if let Err(e) = apply_incompat_patch(pool, patch) {
            failures += 1;
            warning(format!(
                "Could not update incompatibility list of employee {}: {e}",
                patch.employee_id
            ));
        }
    }

    if failures > 0 {
        warning(format!(
            "{failures} reciprocal update(s) failed; those employees are now out of sync with {of}"
        ));
    }

    success(format!(
        "Incompatibility {} between {of} and {with}",
        if enabled { "enabled" } else { "disabled" }
    ));
    Ok(())
}
