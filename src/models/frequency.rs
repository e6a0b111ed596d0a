use serde::{Deserialize, Serialize};

/// How often a recurrence rule repeats on its weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Weekly,
    BiWeekly,
    Monthly,
}

impl Frequency {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::BiWeekly => "bi-weekly",
            Frequency::Monthly => "monthly",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "weekly" => Some(Frequency::Weekly),
            "bi-weekly" => Some(Frequency::BiWeekly),
            "monthly" => Some(Frequency::Monthly),
            _ => None,
        }
    }

    /// Helper: accept user input in English or in the shop's Portuguese
    /// spreadsheet vocabulary (semanal / quinzenal / mensal).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "weekly" | "semanal" => Some(Frequency::Weekly),
            "bi-weekly" | "biweekly" | "quinzenal" => Some(Frequency::BiWeekly),
            "monthly" | "mensal" => Some(Frequency::Monthly),
            _ => None,
        }
    }
}
