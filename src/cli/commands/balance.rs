use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::balance::yearly_balance;
use crate::core::calendar::HolidayCalendar;
use crate::db;
use crate::db::queries::{get_employee, list_employees, list_vacations};
use crate::errors::AppResult;
use crate::utils::date::current_year;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Balance {
        employee,
        year,
        allowance,
    } = cmd
    {
        let pool = db::open(cfg)?;
        let calendar = HolidayCalendar::standard();

        let year = year.unwrap_or_else(current_year);
        let allowance = allowance.unwrap_or(cfg.allowance_days);

        let employees = match employee {
            Some(id) => vec![get_employee(&pool, id)?],
            None => list_employees(&pool)?,
        };
        let vacations = list_vacations(&pool)?;

        let mut table = Table::new(["ID", "NAME", "YEAR", "TOTAL", "USED", "REMAINING"]);
        for emp in &employees {
            let balance = yearly_balance(&calendar, &emp.id, year, &vacations, allowance);
            table.add_row(vec![
                emp.id.clone(),
                emp.name.clone(),
                year.to_string(),
                allowance.to_string(),
                balance.used.to_string(),
                balance.remaining.to_string(),
            ]);
        }

        if table.is_empty() {
            println!("No employees found.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
