use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::HolidayCalendar;
use crate::db;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date::current_year;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        year,
        allowance,
        force,
    } = cmd
    {
        let pool = db::open(cfg)?;
        let calendar = HolidayCalendar::standard();

        ExportLogic::export(
            &pool,
            &calendar,
            format.clone(),
            file,
            year.unwrap_or_else(current_year),
            allowance.unwrap_or(cfg.export_allowance_days),
            *force,
        )?;
    }
    Ok(())
}
