use std::sync::Arc;
use tracing::debug;

use crate::application::dtos::RecordStreakDto;
use habitdeck_domain::check_off::{CheckOffRepository, SortOrder, StreakScope};
use habitdeck_domain::habit::Periodicity;
use habitdeck_domain::shared::DomainError;

/// Cross-habit record streaks: the single highest streak value ever reached
/// by any habit of one periodicity, with every occurrence that reached it.
pub struct RecordStreakQueries {
    check_off_repo: Arc<dyn CheckOffRepository>,
}

impl RecordStreakQueries {
    pub fn new(check_off_repo: Arc<dyn CheckOffRepository>) -> Self {
        Self { check_off_repo }
    }

    /// All occurrences of the record streak, oldest first. An empty result
    /// means no habit of this periodicity has ever been checked off.
    pub async fn record_streaks(
        &self,
        periodicity: Periodicity,
    ) -> Result<(u32, Vec<RecordStreakDto>), DomainError> {
        let max = self
            .check_off_repo
            .max_streak(StreakScope::AllHabits, periodicity)
            .await?;

        debug!("Record {} streak across all habits: {}", periodicity, max);

        if max == 0 {
            return Ok((0, Vec::new()));
        }

        let occurrences = self
            .check_off_repo
            .find_with_streak(StreakScope::AllHabits, periodicity, max, SortOrder::DateAsc)
            .await?;

        let rows = occurrences
            .iter()
            .map(|event| RecordStreakDto {
                habit_name: event.habit_name().to_string(),
                streak: event.streak(),
                last_date: event.date().format("%Y-%m-%d").to_string(),
                last_week: event.calendar_week().map(|week| week.to_string()),
            })
            .collect();

        Ok((max, rows))
    }
}
