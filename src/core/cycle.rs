//! Cycle / frequency resolution for recurrence rules.
//!
//! All arithmetic is done on `NaiveDate`, i.e. on whole shop-local days, so
//! neither DST transitions nor ISO week numbering can shift a visit.

use crate::models::frequency::Frequency;
use crate::models::occurrence::Occurrence;
use crate::models::recurrence_rule::RecurrenceRule;
use crate::utils::date::first_weekday_of_month;
use crate::utils::zone::ShopZone;
use chrono::{Datelike, NaiveDate};

/// Visits per club cycle.
pub const CYCLE_LENGTH: i64 = 4;

/// Does `rule` produce a visit on `date`, and which one of the cycle?
/// A rule without a cycle start counts from today in the shop zone.
pub fn resolve_occurrence(rule: &RecurrenceRule, date: NaiveDate, zone: &ShopZone) -> Occurrence {
    resolve_occurrence_at(rule, date, zone.today())
}

/// Same as [`resolve_occurrence`] with an explicit "today".
pub fn resolve_occurrence_at(rule: &RecurrenceRule, date: NaiveDate, today: NaiveDate) -> Occurrence {
    let Some(weekday) = rule.weekday() else {
        return Occurrence::none();
    };
    if date.weekday() != weekday {
        return Occurrence::none();
    }

    let cycle_start = rule.cycle_start_date.unwrap_or(today);
    if date < cycle_start {
        return Occurrence::none();
    }

    // date >= cycle_start, so plain integer division is a floor
    let weeks_elapsed = (date - cycle_start).num_days() / 7;
    let start_bath = i64::from(rule.start_bath_number);

    match rule.frequency {
        Frequency::Weekly => {
            if !(1..=CYCLE_LENGTH).contains(&start_bath) {
                return Occurrence::none();
            }
            let ordinal = (start_bath - 1 + weeks_elapsed).rem_euclid(CYCLE_LENGTH) + 1;
            Occurrence::at(Some(ordinal as u32))
        }
        Frequency::BiWeekly => {
            if weeks_elapsed % 2 == 0 {
                Occurrence::at(None)
            } else {
                Occurrence::none()
            }
        }
        Frequency::Monthly => {
            if date.year() == cycle_start.year() && date.month() == cycle_start.month() {
                if !(1..=CYCLE_LENGTH).contains(&start_bath) {
                    return Occurrence::none();
                }
                ordinal(start_bath + weeks_elapsed)
            } else {
                // numbering restarts at the month's first matching weekday
                let Some(first) = first_weekday_of_month(date.year(), date.month(), weekday) else {
                    return Occurrence::none();
                };
                let weeks_in_month = (date - first).num_days() / 7;
                ordinal(weeks_in_month + 1)
            }
        }
    }
}

fn ordinal(n: i64) -> Occurrence {
    match u32::try_from(n) {
        Ok(n) => Occurrence::at(Some(n)),
        Err(_) => Occurrence::none(),
    }
}
