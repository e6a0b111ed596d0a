//! Time utilities: parsing and formatting HH:MM, minutes-of-day arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Strict `HH:MM` parser.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn require_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn minutes_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

pub fn format_hhmm(total_minutes: u32) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}
