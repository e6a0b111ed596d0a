use chrono::{DateTime, Local, Utc};
use serde::Serialize;

pub const BLOCK_CLIENT_NAME: &str = "Horário Bloqueado";
pub const BLOCK_SUBJECT_NAME: &str = "Admin";
pub const BLOCK_SERVICE_LABEL: &str = "N/A";

#[derive(Debug, Clone, Serialize)]
pub struct Appointment {
    pub id: i64,
    pub start_time: DateTime<Utc>,   // ⇔ appointments.start_time (TEXT RFC3339, UTC)
    pub end_time: DateTime<Utc>,     // ⇔ appointments.end_time (TEXT RFC3339, UTC)
    pub subject_name: String,        // ⇔ appointments.pet_name
    pub client_name: Option<String>, // ⇔ appointments.client_name (NULL for blocks)
    pub contact: String,
    pub service_label: String,       // ⇔ appointments.service ("N/A" for blocks)
    pub total_price_cents: i64,
    pub notes: String,
    pub blocked: bool,               // ⇔ appointments.blocked (INT 0/1)
    pub created_at: String,
}

impl Appointment {
    /// A customer booking, not yet stored.
    pub fn booking(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        client_name: &str,
        subject_name: &str,
        service_label: &str,
    ) -> Self {
        Self {
            id: 0,
            start_time,
            end_time,
            subject_name: subject_name.to_string(),
            client_name: Some(client_name.to_string()),
            contact: String::new(),
            service_label: service_label.to_string(),
            total_price_cents: 0,
            notes: String::new(),
            blocked: false,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// An administrative block of one slot, not yet stored.
    pub fn block(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            start_time,
            end_time,
            subject_name: BLOCK_SUBJECT_NAME.to_string(),
            client_name: Some(BLOCK_CLIENT_NAME.to_string()),
            contact: String::new(),
            service_label: BLOCK_SERVICE_LABEL.to_string(),
            total_price_cents: 0,
            notes: String::new(),
            blocked: true,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
