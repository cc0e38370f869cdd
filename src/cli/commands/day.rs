use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::db;
use crate::db::queries::{list_events, list_vacations};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{iso, parse_date};

/// Day overview: holiday status plus the events and vacations active on one
/// date, optionally narrowed to what a single employee sees.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date, employee } = cmd {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let day_str = iso(day);

        let calendar = HolidayCalendar::standard();
        let pool = db::open(cfg)?;

        match calendar.holiday_name(&day_str) {
            Some(name) => println!("{day_str} - holiday: {name}"),
            None => println!("{day_str}"),
        }

        let events = list_events(&pool)?;
        for ev in events.iter().filter(|ev| {
            ev.covers_day(&day_str)
                && match employee {
                    Some(emp_id) => ev.applies_to(emp_id),
                    None => true,
                }
        }) {
            let scope = if ev.is_global { "global" } else { "assigned" };
            println!("event: {} ({scope}, {} → {})", ev.name, ev.start_date, ev.end_date);
        }

        let vacations = list_vacations(&pool)?;
        for v in vacations.iter().filter(|v| {
            v.covers_day(&day_str)
                && match employee {
                    Some(emp_id) => &v.employee_id == emp_id,
                    None => true,
                }
        }) {
            println!(
                "vacation: {} ({} → {})",
                v.employee_id, v.start_date, v.end_date
            );
        }
    }
    Ok(())
}
