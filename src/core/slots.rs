//! Daily time-slot grids.

use crate::utils::date::weekday_index;
use crate::utils::time::format_hhmm;
use chrono::NaiveDate;

pub const DEFAULT_INTERVAL: u32 = 30;

/// Every `HH:MM` from start to end inclusive, stepping by `interval_minutes`.
/// A reversed range, a zero interval or bounds too large to count in
/// minutes yield an empty grid.
pub fn generate_slots(
    start_hour: u32,
    start_minute: u32,
    end_hour: u32,
    end_minute: u32,
    interval_minutes: u32,
) -> Vec<String> {
    let (Some(start), Some(end)) = (
        minutes(start_hour, start_minute),
        minutes(end_hour, end_minute),
    ) else {
        return Vec::new();
    };

    if interval_minutes == 0 || end < start {
        return Vec::new();
    }

    (start..=end)
        .step_by(interval_minutes as usize)
        .map(format_hhmm)
        .collect()
}

fn minutes(hour: u32, minute: u32) -> Option<u32> {
    hour.checked_mul(60)?.checked_add(minute)
}

/// Customer-facing grid for a date:
/// - Sunday: closed
/// - Wednesday and Thursday: 08:00–16:00
/// - other days: 12:30–16:00
pub fn slots_for_date(date: NaiveDate) -> Vec<String> {
    match weekday_index(date) {
        0 => Vec::new(),
        3 | 4 => generate_slots(8, 0, 16, 0, DEFAULT_INTERVAL),
        _ => generate_slots(12, 30, 16, 0, DEFAULT_INTERVAL),
    }
}
