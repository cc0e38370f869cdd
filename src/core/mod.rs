//! The scheduling engine: pure, synchronous computations over caller-supplied
//! snapshots. Nothing in here touches the database or mutates its inputs.

pub mod balance;
pub mod calendar;
pub mod conflicts;
pub mod incompat;
pub mod workdays;
