//! Which customer slots of a day are still free.

use crate::core::projector::{ProjectionOptions, project};
use crate::core::slots::slots_for_date;
use crate::models::appointment::Appointment;
use crate::models::recurrence_rule::RecurrenceRule;
use chrono::NaiveDate;
use std::collections::HashSet;

/// `slots_for_date(date)` minus every time the projection occupies.
/// Past dates and an unset date have no free slots.
pub fn available_slots(
    date: Option<NaiveDate>,
    rules: &[RecurrenceRule],
    appointments: &[Appointment],
    opts: &ProjectionOptions,
) -> Vec<String> {
    let Some(date) = date else {
        return Vec::new();
    };
    if date < opts.today {
        return Vec::new();
    }

    let occupied: HashSet<String> = project(date, rules, appointments, opts)
        .iter()
        .map(|e| e.time_str())
        .collect();

    slots_for_date(date)
        .into_iter()
        .filter(|slot| !occupied.contains(slot))
        .collect()
}
