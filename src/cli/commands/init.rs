use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the config file (unless in test mode) and the database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    db::open(&cfg)?;
    success("Database initialized.");
    Ok(())
}
