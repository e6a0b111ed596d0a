//! Schedule projection: merges one-off appointments and recurrence rules
//! into the ordered list of occupied positions of a single day.
//!
//! Pure: no I/O, no shared state. Rules that cannot be evaluated (bad
//! weekday, unparseable time) are skipped, never reported as errors.

use crate::config::Config;
use crate::core::cycle::resolve_occurrence_at;
use crate::errors::AppResult;
use crate::models::appointment::Appointment;
use crate::models::recurrence_rule::RecurrenceRule;
use crate::models::schedule_entry::ScheduleEntry;
use crate::utils::date::weekday_index;
use crate::utils::zone::ShopZone;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy)]
pub struct ProjectionOptions {
    /// `true`: `blocked` appointments show up as [`ScheduleEntry::Blocked`].
    /// `false`: blocking is rule-based only and flagged appointments are dropped.
    pub legacy_blocked_appointments: bool,
    pub zone: ShopZone,
    /// Cycle start for rules stored without one.
    pub today: NaiveDate,
}

impl ProjectionOptions {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let zone = cfg.shop_zone()?;
        Ok(Self {
            legacy_blocked_appointments: cfg.legacy_blocked_appointments,
            zone,
            today: zone.today(),
        })
    }
}

/// Project `date`. `None` (no date selected yet) yields an empty schedule.
pub fn project_selection(
    date: Option<NaiveDate>,
    rules: &[RecurrenceRule],
    appointments: &[Appointment],
    opts: &ProjectionOptions,
) -> Vec<ScheduleEntry> {
    match date {
        Some(d) => project(d, rules, appointments, opts),
        None => Vec::new(),
    }
}

pub fn project(
    date: NaiveDate,
    rules: &[RecurrenceRule],
    appointments: &[Appointment],
    opts: &ProjectionOptions,
) -> Vec<ScheduleEntry> {
    let mut entries: Vec<ScheduleEntry> = appointments
        .iter()
        .filter_map(|apt| appointment_entry(apt, date, opts))
        .collect();

    let day_index = weekday_index(date);
    entries.extend(
        rules
            .iter()
            .filter(|rule| rule.day_of_week == day_index)
            .filter_map(|rule| recurring_entry(rule, date, opts)),
    );

    // stable: same-time entries keep appointment-then-rule order
    entries.sort_by_key(|e| e.start_time());
    entries
}

fn appointment_entry(
    apt: &Appointment,
    date: NaiveDate,
    opts: &ProjectionOptions,
) -> Option<ScheduleEntry> {
    let start_time = opts.zone.local(&apt.start_time);
    if start_time.date() != date {
        return None;
    }

    if apt.blocked {
        return opts
            .legacy_blocked_appointments
            .then_some(ScheduleEntry::Blocked {
                id: apt.id,
                start_time,
            });
    }

    Some(ScheduleEntry::Client {
        id: apt.id,
        start_time,
        client_name: apt.client_name.clone().unwrap_or_default(),
        subject_name: apt.subject_name.clone(),
        service_label: apt.service_label.clone(),
    })
}

fn recurring_entry(
    rule: &RecurrenceRule,
    date: NaiveDate,
    opts: &ProjectionOptions,
) -> Option<ScheduleEntry> {
    let time = rule.parsed_time()?;
    let occurrence = resolve_occurrence_at(rule, date, opts.today);
    if !occurrence.occurs {
        return None;
    }

    Some(ScheduleEntry::Recurring {
        start_time: date.and_time(time),
        subject_name: rule.subject_name.clone(),
        label: rule.label.clone(),
        visit_ordinal: occurrence.visit_ordinal,
    })
}
