use async_trait::async_trait;

use crate::shared::DomainError;

/// Persisted one-row marker recording whether the one-time seed of predefined
/// habits has already run. Read once at startup by the seeding collaborator.
#[async_trait]
pub trait SeedFlagRepository: Send + Sync {
    async fn seed_completed(&self) -> Result<bool, DomainError>;

    async fn mark_seed_completed(&self) -> Result<(), DomainError>;
}
