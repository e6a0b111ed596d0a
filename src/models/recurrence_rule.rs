use super::frequency::Frequency;
use chrono::{Local, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;

pub const DEFAULT_LABEL: &str = "Clubinho";

#[derive(Debug, Clone, Serialize)]
pub struct RecurrenceRule {
    pub id: i64,
    pub day_of_week: u32,                     // ⇔ recurrence_rules.day_of_week (0 = Sunday)
    pub time: String,                         // ⇔ recurrence_rules.time (TEXT "HH:MM")
    pub subject_name: String,                 // ⇔ recurrence_rules.pet_name
    pub label: String,                        // ⇔ recurrence_rules.label
    pub frequency: Frequency,                 // ⇔ recurrence_rules.frequency
    pub cycle_start_date: Option<NaiveDate>,  // ⇔ recurrence_rules.cycle_start_date (NULL = today)
    pub start_bath_number: u32,               // ⇔ recurrence_rules.start_bath_number (1..=4)
    pub created_at: String,                   // ⇔ recurrence_rules.created_at (ISO8601)
}

impl RecurrenceRule {
    /// Builds an unsaved rule (`id = 0`) with the default label and visit number 1.
    pub fn new(day_of_week: u32, time: &str, subject_name: &str, frequency: Frequency) -> Self {
        Self {
            id: 0,
            day_of_week,
            time: time.to_string(),
            subject_name: subject_name.to_string(),
            label: DEFAULT_LABEL.to_string(),
            frequency,
            cycle_start_date: None,
            start_bath_number: 1,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn starting(mut self, cycle_start_date: NaiveDate) -> Self {
        self.cycle_start_date = Some(cycle_start_date);
        self
    }

    pub fn with_start_bath_number(mut self, n: u32) -> Self {
        self.start_bath_number = n;
        self
    }

    /// `None` when the stored day index is outside 0..=6.
    pub fn weekday(&self) -> Option<Weekday> {
        match self.day_of_week {
            0 => Some(Weekday::Sun),
            1 => Some(Weekday::Mon),
            2 => Some(Weekday::Tue),
            3 => Some(Weekday::Wed),
            4 => Some(Weekday::Thu),
            5 => Some(Weekday::Fri),
            6 => Some(Weekday::Sat),
            _ => None,
        }
    }

    /// `None` when the stored time is not a valid `HH:MM`.
    pub fn parsed_time(&self) -> Option<NaiveTime> {
        crate::utils::time::parse_time(&self.time)
    }

    pub fn cycle_start_str(&self) -> String {
        self.cycle_start_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}
