use chrono::NaiveDateTime;
use serde::Serialize;

/// One occupied position of a projected day. Times are shop-local wall-clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScheduleEntry {
    Client {
        /// Stored appointment id, what `cancel` expects.
        id: i64,
        start_time: NaiveDateTime,
        client_name: String,
        subject_name: String,
        service_label: String,
    },
    Recurring {
        start_time: NaiveDateTime,
        subject_name: String,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        visit_ordinal: Option<u32>,
    },
    /// Only produced when appointment-level blocks are enabled.
    Blocked { id: i64, start_time: NaiveDateTime },
}

impl ScheduleEntry {
    pub fn start_time(&self) -> NaiveDateTime {
        match self {
            ScheduleEntry::Client { start_time, .. }
            | ScheduleEntry::Recurring { start_time, .. }
            | ScheduleEntry::Blocked { start_time, .. } => *start_time,
        }
    }

    pub fn time_str(&self) -> String {
        self.start_time().format("%H:%M").to_string()
    }

    pub fn kind_str(&self) -> &'static str {
        match self {
            ScheduleEntry::Client { .. } => "client",
            ScheduleEntry::Recurring { .. } => "recurring",
            ScheduleEntry::Blocked { .. } => "blocked",
        }
    }

    /// Appointment id behind the entry; recurring visits have none.
    pub fn appointment_id(&self) -> Option<i64> {
        match self {
            ScheduleEntry::Client { id, .. } | ScheduleEntry::Blocked { id, .. } => Some(*id),
            ScheduleEntry::Recurring { .. } => None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self, ScheduleEntry::Recurring { .. })
    }
}
