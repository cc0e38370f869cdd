pub mod date;
pub mod id;
pub mod table;
