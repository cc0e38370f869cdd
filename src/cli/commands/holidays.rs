use crate::cli::parser::Commands;
use crate::core::calendar::HolidayCalendar;
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Holidays { year } = cmd {
        let calendar = HolidayCalendar::standard();
        let entries = calendar.entries(*year);

        let mut table = Table::new(["DATE", "HOLIDAY"]);
        for (date, name) in &entries {
            table.add_row(vec![date.clone(), name.clone()]);
        }

        if table.is_empty() {
            println!("No holidays registered for that period.");
        } else {
            print!("{}", table.render());
        }
    }
    Ok(())
}
