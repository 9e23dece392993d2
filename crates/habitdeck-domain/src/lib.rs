// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod check_off;
pub mod habit;
pub mod seeding;
pub mod shared;

// Re-exports for convenience
pub use shared::DomainError;
