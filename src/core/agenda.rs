use crate::core::projector::{ProjectionOptions, project};
use crate::db::pool::DbPool;
use crate::db::queries::{list_appointments, list_recurrence_rules};
use crate::errors::{AppError, AppResult};
use crate::models::appointment::Appointment;
use crate::models::schedule_entry::ScheduleEntry;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_kind};
use crate::utils::date::{all_days_of_month, weekday_index, weekday_name_pt};
use crate::utils::formatting::pad_right;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// One printed agenda line. Recurring entries at the same time may be
/// merged into a single multi-pet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaRow {
    /// Appointment id for bookings and blocks, `None` for recurring visits.
    pub id: Option<i64>,
    pub time: String,
    pub kind: &'static str,
    pub details: String,
    pub service: String,
}

fn visit_text(label: &str, visit_ordinal: Option<u32>) -> String {
    match visit_ordinal {
        Some(n) => format!("{} · banho {}", label, n),
        None => label.to_string(),
    }
}

fn row_for(entry: &ScheduleEntry) -> AgendaRow {
    let id = entry.appointment_id();
    let time = entry.time_str();
    match entry {
        ScheduleEntry::Client {
            client_name,
            subject_name,
            service_label,
            ..
        } => AgendaRow {
            id,
            time,
            kind: "client",
            details: format!("{} / {}", client_name, subject_name),
            service: service_label.clone(),
        },
        ScheduleEntry::Recurring {
            subject_name,
            label,
            visit_ordinal,
            ..
        } => AgendaRow {
            id,
            time,
            kind: "recurring",
            details: subject_name.clone(),
            service: visit_text(label, *visit_ordinal),
        },
        ScheduleEntry::Blocked { .. } => AgendaRow {
            id,
            time,
            kind: "blocked",
            details: "Horário Bloqueado".to_string(),
            service: "N/A".to_string(),
        },
    }
}

pub struct AgendaLogic;

impl AgendaLogic {
    /// Read the current rules and the day's appointments, then project.
    pub fn day(pool: &DbPool, opts: &ProjectionOptions, date: NaiveDate) -> AppResult<Vec<ScheduleEntry>> {
        let rules = list_recurrence_rules(pool)?;
        let appointments = list_appointments(pool, opts.zone.days_range_utc(date, date))?;
        Ok(project(date, &rules, &appointments, opts))
    }

    /// Days of a month with at least one visible appointment.
    pub fn highlighted_days(
        pool: &DbPool,
        opts: &ProjectionOptions,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<NaiveDate>> {
        let days = all_days_of_month(year, month);
        let (Some(first), Some(last)) = (days.first(), days.last()) else {
            return Err(AppError::InvalidDate(format!("{}-{:02}", year, month)));
        };

        let appointments = list_appointments(pool, opts.zone.days_range_utc(*first, *last))?;

        let set: BTreeSet<NaiveDate> = appointments
            .iter()
            .filter(|a| !a.blocked || opts.legacy_blocked_appointments)
            .map(|a| opts.zone.local(&a.start_time).date())
            .filter(|d| d >= first && d <= last)
            .collect();

        Ok(set.into_iter().collect())
    }

    /// Stored bookings and blocks of one shop-local day, or from today on
    /// when no day is given. `blocked_only` keeps the blocks alone.
    pub fn appointments(
        pool: &DbPool,
        opts: &ProjectionOptions,
        date: Option<NaiveDate>,
        blocked_only: bool,
    ) -> AppResult<Vec<Appointment>> {
        let stored = match date {
            Some(d) => list_appointments(pool, opts.zone.days_range_utc(d, d))?,
            None => list_appointments(pool, None)?
                .into_iter()
                .filter(|a| opts.zone.local(&a.start_time).date() >= opts.today)
                .collect(),
        };

        Ok(stored
            .into_iter()
            .filter(|a| !blocked_only || a.blocked)
            .collect())
    }

    pub fn print_appointments(appointments: &[Appointment], opts: &ProjectionOptions) {
        if appointments.is_empty() {
            println!("Nenhum agendamento encontrado.");
            return;
        }

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Data", 10),
            Column::new("Hora", 5),
            Column::new("Cliente", 20),
            Column::new("Pet", 14),
            Column::new("Serviço", 20),
            Column::new("Bloqueio", 8),
        ]);

        for a in appointments {
            let local = opts.zone.local(&a.start_time);
            table.add_row(vec![
                a.id.to_string(),
                local.format("%Y-%m-%d").to_string(),
                local.format("%H:%M").to_string(),
                a.client_name.clone().unwrap_or_default(),
                a.subject_name.clone(),
                a.service_label.clone(),
                if a.blocked { "sim" } else { "não" }.to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    /// Rows for display; with `group`, recurring entries sharing a time collapse.
    pub fn rows(entries: &[ScheduleEntry], group: bool) -> Vec<AgendaRow> {
        let mut rows: Vec<AgendaRow> = Vec::new();

        for entry in entries {
            let row = row_for(entry);
            if group
                && entry.is_recurring()
                && let Some(prev) = rows
                    .iter_mut()
                    .find(|r| r.kind == "recurring" && r.time == row.time)
            {
                prev.details.push_str(", ");
                prev.details.push_str(&row.details);
                if !prev.service.split(" | ").any(|s| s == row.service) {
                    prev.service.push_str(" | ");
                    prev.service.push_str(&row.service);
                }
                continue;
            }
            rows.push(row);
        }

        rows
    }

    pub fn print(date: NaiveDate, entries: &[ScheduleEntry], group: bool) {
        header(format!(
            "Agenda {} ({})",
            date,
            weekday_name_pt(weekday_index(date))
        ));

        if entries.is_empty() {
            println!("Nenhum agendamento para este dia.");
            return;
        }

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Horário", 7),
            Column::new("Tipo", 10),
            Column::new("Detalhes", 36),
            Column::new("Serviço", 24),
        ]);

        for row in Self::rows(entries, group) {
            let color = color_for_kind(row.kind);
            table.add_row(vec![
                row.id.map(|id| id.to_string()).unwrap_or_default(),
                row.time,
                format!("{}{}{}", color, pad_right(row.kind, 10), RESET),
                row.details,
                row.service,
            ]);
        }

        print!("{}", table.render());
    }

    pub fn print_json(entries: &[ScheduleEntry]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::Other(format!("JSON serialization failed: {}", e)))?;
        println!("{}", json);
        Ok(())
    }
}
