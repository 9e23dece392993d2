use async_trait::async_trait;

use crate::habit::{Habit, Periodicity};
use crate::shared::DomainError;

/// Habit persistence interface
#[async_trait]
pub trait HabitRepository: Send + Sync {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Habit>, DomainError>;

    /// List habits, optionally filtered by periodicity,
    /// ordered by periodicity then creation date
    async fn find_all(&self, periodicity: Option<Periodicity>) -> Result<Vec<Habit>, DomainError>;

    async fn exists(&self, name: &str) -> Result<bool, DomainError>;

    /// Remove the habit and every check-off event that references it, atomically.
    /// Fails with `HabitNotFound` if no such habit exists; no partial effect.
    async fn delete_cascade(&self, name: &str) -> Result<(), DomainError>;
}
