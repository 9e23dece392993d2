use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::DeleteHabitCommand;
use habitdeck_domain::habit::HabitRepository;
use habitdeck_domain::shared::DomainError;

/// Delete habit command handler. Removal cascades to every check-off event of
/// the habit; either everything disappears or nothing does.
pub struct DeleteHabitCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
}

impl DeleteHabitCommandHandler {
    pub fn new(habit_repo: Arc<dyn HabitRepository>) -> Self {
        Self { habit_repo }
    }
}

#[async_trait]
impl CommandHandler<DeleteHabitCommand> for DeleteHabitCommandHandler {
    type Result = ();

    async fn handle(&self, cmd: DeleteHabitCommand) -> Result<Self::Result, DomainError> {
        info!("Handling DeleteHabitCommand for habit: {}", cmd.name);

        self.habit_repo.delete_cascade(&cmd.name).await?;

        info!("Habit '{}' and all related data deleted", cmd.name);
        Ok(())
    }
}
