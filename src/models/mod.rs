pub mod appointment;
pub mod frequency;
pub mod occurrence;
pub mod recurrence_rule;
pub mod schedule_entry;
pub mod service;
