#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Get the bare error message without the variant prefix
    pub fn message(&self) -> &str {
        match self {
            DomainError::HabitNotFound(msg)
            | DomainError::ConstraintViolation(msg)
            | DomainError::Repository(msg)
            | DomainError::Infrastructure(msg)
            | DomainError::Validation(msg)
            | DomainError::DataIntegrity(msg)
            | DomainError::InvalidInput(msg) => msg,
        }
    }

    /// Duplicate check-offs are a defined no-op, safe to re-attempt
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DomainError::ConstraintViolation(_))
    }
}
