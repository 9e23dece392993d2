use serde::{Deserialize, Serialize};

use habitdeck_domain::habit::Periodicity;

/// Streak anchored at the present period; 0 when today / this week has no
/// event. Whether a value of 1 is presented as "just started" is a
/// presentation-layer decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentStreakDto {
    pub habit_name: String,
    pub periodicity: Periodicity,
    pub current_streak: u32,
}

/// The maximum streak a habit ever reached, with enough metadata to
/// reconstruct every message variant: how often the maximum was hit, when the
/// most recent occurrence ended and whether it is still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestStreakDto {
    pub habit_name: String,
    pub periodicity: Periodicity,
    pub longest_streak: u32,
    pub occasions: u32,
    pub most_recent_date: Option<String>, // YYYY-MM-DD
    pub most_recent_week: Option<String>, // "<week>-<year>", weekly habits only
    pub still_active: bool,
}

/// One occurrence of the record streak across all habits of a periodicity.
/// The same habit may appear more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordStreakDto {
    pub habit_name: String,
    pub streak: u32,
    pub last_date: String,             // YYYY-MM-DD
    pub last_week: Option<String>,     // "<week>-<year>", weekly habits only
}
