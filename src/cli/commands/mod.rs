pub mod balance;
pub mod config;
pub mod day;
pub mod employee;
pub mod event;
pub mod export;
pub mod holidays;
pub mod init;
pub mod vacation;
pub mod workdays;
