use serde::{Deserialize, Serialize};

use habitdeck_domain::check_off::CheckOffEvent;

/// One row of a habit's check-off history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOffDto {
    pub date: String,                  // YYYY-MM-DD
    pub time: String,                  // HH:MM, display only
    pub calendar_week: Option<String>, // "<week>-<year>" for weekly habits
    pub streak: u32,
}

impl From<&CheckOffEvent> for CheckOffDto {
    fn from(event: &CheckOffEvent) -> Self {
        Self {
            date: event.date().format("%Y-%m-%d").to_string(),
            time: event.time().format("%H:%M").to_string(),
            calendar_week: event.calendar_week().map(|w| w.to_string()),
            streak: event.streak(),
        }
    }
}

/// Result of a check-off attempt. A duplicate check-off within the same
/// period is a defined no-op, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOffOutcome {
    Completed { streak: u32, period: String },
    AlreadyCheckedOff { period: String },
}
