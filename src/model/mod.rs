// File: ./src/model/mod.rs
pub mod adapter;
pub mod item;
pub mod matcher;
pub mod parser;
pub mod recurrence;
pub mod rooms;

pub use item::{EnrichedDiscipline, Frequency, ParsedDiscipline, Schedule, Weekday};
