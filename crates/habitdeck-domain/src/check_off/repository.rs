use async_trait::async_trait;

use crate::check_off::{CheckOffEvent, PeriodKey};
use crate::habit::Periodicity;
use crate::shared::DomainError;

/// Grouping scope of a streak aggregation: one habit or the whole corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreakScope {
    Habit(String),
    AllHabits,
}

impl StreakScope {
    pub fn habit(name: impl Into<String>) -> Self {
        StreakScope::Habit(name.into())
    }
}

/// Listing direction for streak occurrences. The per-habit longest-streak
/// query wants the most recent occurrence first; the cross-habit record list
/// is chronological. Both directions are part of the observable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    DateAsc,
    DateDesc,
}

/// Append-only store of check-off events, keyed by (habit, period).
///
/// Events are never updated; the only mutations are `append` and the
/// habit-cascade delete owned by `HabitRepository`.
#[async_trait]
pub trait CheckOffRepository: Send + Sync {
    async fn find(
        &self,
        habit_name: &str,
        key: &PeriodKey,
    ) -> Result<Option<CheckOffEvent>, DomainError>;

    async fn exists(&self, habit_name: &str, key: &PeriodKey) -> Result<bool, DomainError>;

    /// Insert one event. Fails with `ConstraintViolation` if the habit already
    /// has an event for the same period; state is left unchanged in that case.
    async fn append(&self, event: &CheckOffEvent) -> Result<(), DomainError>;

    /// Full check-off history of one habit, oldest first
    async fn list_for_habit(&self, habit_name: &str) -> Result<Vec<CheckOffEvent>, DomainError>;

    /// Maximum streak counter within the scope, 0 when no events qualify
    async fn max_streak(
        &self,
        scope: StreakScope,
        periodicity: Periodicity,
    ) -> Result<u32, DomainError>;

    /// All events within the scope whose counter equals `streak`, in the
    /// requested date order
    async fn find_with_streak(
        &self,
        scope: StreakScope,
        periodicity: Periodicity,
        streak: u32,
        order: SortOrder,
    ) -> Result<Vec<CheckOffEvent>, DomainError>;
}
