use serde::{Deserialize, Serialize};

use habitdeck_domain::habit::{Habit, Periodicity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitDto {
    pub name: String,
    pub description: String,
    pub periodicity: Periodicity,
    pub create_date: String, // ISO 8601 date (YYYY-MM-DD)
}

impl From<&Habit> for HabitDto {
    fn from(habit: &Habit) -> Self {
        Self {
            name: habit.name().to_string(),
            description: habit.description().to_string(),
            periodicity: habit.periodicity(),
            create_date: habit.create_date().format("%Y-%m-%d").to_string(),
        }
    }
}
