//! vacaplan library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Employee { action } => cli::commands::employee::handle(action, cfg),
        Commands::Vacation { action } => cli::commands::vacation::handle(action, cfg),
        Commands::Event { action } => cli::commands::event::handle(action, cfg),
        Commands::Workdays { .. } => cli::commands::workdays::handle(&cli.command),
        Commands::Balance { .. } => cli::commands::balance::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Holidays { .. } => cli::commands::holidays::handle(&cli.command),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load config once, then apply the optional DB override from the CLI.
    // In test mode the user's config file is never read, so runs stay hermetic.
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()
    };
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
