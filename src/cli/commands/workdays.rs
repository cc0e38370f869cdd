use crate::cli::parser::Commands;
use crate::core::calendar::HolidayCalendar;
use crate::core::workdays::count_working_days;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Workdays { from, to } = cmd {
        let start = parse_date(from).ok_or_else(|| AppError::InvalidDate(from.to_string()))?;
        let end = parse_date(to).ok_or_else(|| AppError::InvalidDate(to.to_string()))?;

        let calendar = HolidayCalendar::standard();
        let count = count_working_days(&calendar, start, end);

        println!("Working days from {from} to {to}: {count}");
    }
    Ok(())
}
