use chrono::{NaiveDate, NaiveTime};

use crate::application::commands::command_handler::Command;
use habitdeck_domain::habit::Periodicity;

#[derive(Debug, Clone)]
pub struct CreateHabitCommand {
    pub name: String,
    pub description: String,
    pub periodicity: Periodicity,
}

impl Command for CreateHabitCommand {}

/// Mark a habit as completed for the period containing `date`. Both fields
/// default to "now"; the time is informational only.
#[derive(Debug, Clone)]
pub struct CheckOffCommand {
    pub habit_name: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
}

impl CheckOffCommand {
    pub fn now(habit_name: impl Into<String>) -> Self {
        Self {
            habit_name: habit_name.into(),
            date: None,
            time: None,
        }
    }
}

impl Command for CheckOffCommand {}

#[derive(Debug, Clone)]
pub struct DeleteHabitCommand {
    pub name: String,
}

impl Command for DeleteHabitCommand {}
