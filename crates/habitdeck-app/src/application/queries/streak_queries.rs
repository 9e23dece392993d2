use chrono::Local;
use std::sync::Arc;
use tracing::debug;

use crate::application::dtos::{CurrentStreakDto, LongestStreakDto};
use habitdeck_domain::check_off::{CheckOffRepository, PeriodKey, SortOrder, StreakScope};
use habitdeck_domain::habit::HabitRepository;
use habitdeck_domain::shared::DomainError;

/// Read-side streak queries for a single habit. Every answer is derived from
/// the stored event counters; nothing is recomputed from scratch.
pub struct StreakQueries {
    habit_repo: Arc<dyn HabitRepository>,
    check_off_repo: Arc<dyn CheckOffRepository>,
}

impl StreakQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        check_off_repo: Arc<dyn CheckOffRepository>,
    ) -> Self {
        Self {
            habit_repo,
            check_off_repo,
        }
    }

    /// The streak anchored at the present period, or 0 when today (daily) or
    /// the current ISO week (weekly) holds no event.
    pub async fn current_streak(&self, habit_name: &str) -> Result<CurrentStreakDto, DomainError> {
        let habit = self
            .habit_repo
            .find_by_name(habit_name)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(habit_name.to_string()))?;

        let today = Local::now().date_naive();
        let key = PeriodKey::for_date(habit.periodicity(), today);
        let current = self
            .check_off_repo
            .find(habit.name(), &key)
            .await?
            .map(|event| event.streak())
            .unwrap_or(0);

        debug!("Current streak for '{}': {}", habit.name(), current);

        Ok(CurrentStreakDto {
            habit_name: habit.name().to_string(),
            periodicity: habit.periodicity(),
            current_streak: current,
        })
    }

    /// The maximum streak the habit ever reached, how often it was reached,
    /// when the most recent occurrence ended and whether it is still running.
    pub async fn longest_streak(&self, habit_name: &str) -> Result<LongestStreakDto, DomainError> {
        let habit = self
            .habit_repo
            .find_by_name(habit_name)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(habit_name.to_string()))?;

        let periodicity = habit.periodicity();
        let scope = StreakScope::habit(habit.name());
        let max = self
            .check_off_repo
            .max_streak(scope.clone(), periodicity)
            .await?;

        if max == 0 {
            return Ok(LongestStreakDto {
                habit_name: habit.name().to_string(),
                periodicity,
                longest_streak: 0,
                occasions: 0,
                most_recent_date: None,
                most_recent_week: None,
                still_active: false,
            });
        }

        // Most recent occurrence first; its period decides still_active
        let occurrences = self
            .check_off_repo
            .find_with_streak(scope, periodicity, max, SortOrder::DateDesc)
            .await?;
        let latest = occurrences.first().ok_or_else(|| {
            DomainError::DataIntegrity(format!(
                "no event carries the maximum streak {max} for habit '{}'",
                habit.name()
            ))
        })?;

        let today = Local::now().date_naive();
        let current_key = PeriodKey::for_date(periodicity, today);
        let still_active = latest.period_key() == current_key;

        Ok(LongestStreakDto {
            habit_name: habit.name().to_string(),
            periodicity,
            longest_streak: max,
            occasions: occurrences.len() as u32,
            most_recent_date: Some(latest.date().format("%Y-%m-%d").to_string()),
            most_recent_week: latest.calendar_week().map(|week| week.to_string()),
            still_active,
        })
    }
}
