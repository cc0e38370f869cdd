use crate::cli::parser::EventAction;
use crate::config::Config;
use crate::db;
use crate::db::queries::{delete_event, insert_event, list_events};
use crate::errors::{AppError, AppResult};
use crate::models::event::CompanyEvent;
use crate::ui::messages::success;
use crate::utils::date::{iso, parse_date};
use crate::utils::id;
use crate::utils::table::Table;

pub fn handle(action: &EventAction, cfg: &Config) -> AppResult<()> {
    let pool = db::open(cfg)?;

    match action {
        EventAction::Add {
            name,
            from,
            to,
            global,
            assigned,
            id: explicit_id,
        } => {
            let start = parse_date(from).ok_or_else(|| AppError::InvalidDate(from.to_string()))?;
            let end = parse_date(to).ok_or_else(|| AppError::InvalidDate(to.to_string()))?;
            if start > end {
                return Err(AppError::InvalidRange(format!("{from} is after {to}")));
            }

            let event = CompanyEvent {
                id: explicit_id.clone().unwrap_or_else(|| id::generate("evt")),
                name: name.clone(),
                start_date: iso(start),
                end_date: iso(end),
                is_global: *global,
                assigned_employee_ids: if *global { Vec::new() } else { assigned.clone() },
            };

            insert_event(&pool, &event)?;
            success(format!("Event '{}' saved with id {}", event.name, event.id));
        }

        EventAction::List => {
            let events = list_events(&pool)?;

            let mut table = Table::new(["ID", "NAME", "FROM", "TO", "SCOPE"]);
            for ev in &events {
                let scope = if ev.is_global {
                    "global".to_string()
                } else {
                    ev.assigned_employee_ids.join(", ")
                };
                table.add_row(vec![
                    ev.id.clone(),
                    ev.name.clone(),
                    ev.start_date.clone(),
                    ev.end_date.clone(),
                    scope,
                ]);
            }

            if table.is_empty() {
                println!("No events found.");
            } else {
                print!("{}", table.render());
            }
        }

        EventAction::Del { id } => {
            delete_event(&pool, id)?;
            success(format!("Event {id} deleted"));
        }
    }

    Ok(())
}
