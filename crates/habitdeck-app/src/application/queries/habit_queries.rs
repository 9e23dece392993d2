use std::sync::Arc;

use crate::application::dtos::{CheckOffDto, HabitDto};
use habitdeck_domain::check_off::CheckOffRepository;
use habitdeck_domain::habit::{HabitRepository, Periodicity};
use habitdeck_domain::shared::DomainError;

/// Habit listing and history queries.
pub struct HabitQueries {
    habit_repo: Arc<dyn HabitRepository>,
    check_off_repo: Arc<dyn CheckOffRepository>,
}

impl HabitQueries {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        check_off_repo: Arc<dyn CheckOffRepository>,
    ) -> Self {
        Self {
            habit_repo,
            check_off_repo,
        }
    }

    /// All habits, optionally narrowed to one periodicity. Ordered by
    /// periodicity, then creation date.
    pub async fn list_habits(
        &self,
        periodicity: Option<Periodicity>,
    ) -> Result<Vec<HabitDto>, DomainError> {
        let habits = self.habit_repo.find_all(periodicity).await?;
        Ok(habits.iter().map(HabitDto::from).collect())
    }

    pub async fn get_habit(&self, name: &str) -> Result<HabitDto, DomainError> {
        let habit = self
            .habit_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(name.to_string()))?;
        Ok(HabitDto::from(&habit))
    }

    /// Full check-off history for one habit, oldest first.
    pub async fn check_off_history(&self, name: &str) -> Result<Vec<CheckOffDto>, DomainError> {
        if !self.habit_repo.exists(name).await? {
            return Err(DomainError::HabitNotFound(name.to_string()));
        }
        let events = self.check_off_repo.list_for_habit(name).await?;
        Ok(events.iter().map(CheckOffDto::from).collect())
    }
}
