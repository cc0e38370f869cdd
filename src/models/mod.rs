pub mod employee;
pub mod event;
pub mod vacation;
