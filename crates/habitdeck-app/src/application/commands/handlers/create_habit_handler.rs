use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::CreateHabitCommand;
use crate::application::dtos::HabitDto;
use habitdeck_domain::habit::{Habit, HabitRepository};
use habitdeck_domain::shared::DomainError;

/// Create habit command handler
pub struct CreateHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl CreateHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<CreateHabitCommand> for CreateHabitCommandHandler {
    type Result = HabitDto;

    async fn handle(&self, cmd: CreateHabitCommand) -> Result<Self::Result, DomainError> {
        info!("Handling CreateHabitCommand for habit: {}", cmd.name);

        // Habit names are identities; a second habit with the same name is
        // rejected without touching state
        if self.habit_repo.exists(&cmd.name).await? {
            return Err(DomainError::Validation(format!(
                "A habit named \"{}\" already exists",
                cmd.name
            )));
        }

        let habit = Habit::new(cmd.name, cmd.description, cmd.periodicity);
        self.habit_repo.save(&habit).await?;

        info!(
            "Habit created: {} ({}, created {})",
            habit.name(),
            habit.periodicity(),
            habit.create_date()
        );

        Ok(HabitDto::from(&habit))
    }
}
