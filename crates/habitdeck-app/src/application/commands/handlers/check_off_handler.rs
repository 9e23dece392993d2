use async_trait::async_trait;
use chrono::Local;
use std::sync::Arc;
use tracing::info;

use crate::application::commands::command_handler::CommandHandler;
use crate::application::commands::habit_commands::CheckOffCommand;
use crate::application::dtos::CheckOffOutcome;
use habitdeck_domain::check_off::{CheckOffEvent, CheckOffRepository, PeriodKey};
use habitdeck_domain::habit::HabitRepository;
use habitdeck_domain::shared::DomainError;

/// Check-off command handler: appends exactly one immutable event, or none.
///
/// The streak counter continues the immediately preceding period (previous
/// day, or the ISO week seven days back) and restarts at 1 after any gap.
pub struct CheckOffCommandHandler {
    habit_repo: Arc<dyn HabitRepository>,
    check_off_repo: Arc<dyn CheckOffRepository>,
}

impl CheckOffCommandHandler {
    pub fn new(
        habit_repo: Arc<dyn HabitRepository>,
        check_off_repo: Arc<dyn CheckOffRepository>,
    ) -> Self {
        Self {
            habit_repo,
            check_off_repo,
        }
    }
}

#[async_trait]
impl CommandHandler<CheckOffCommand> for CheckOffCommandHandler {
    type Result = CheckOffOutcome;

    async fn handle(&self, cmd: CheckOffCommand) -> Result<Self::Result, DomainError> {
        info!("Handling CheckOffCommand for habit: {}", cmd.habit_name);

        // 1. Resolve the habit; an unknown name is fatal to this operation
        let habit = self
            .habit_repo
            .find_by_name(&cmd.habit_name)
            .await?
            .ok_or_else(|| DomainError::HabitNotFound(cmd.habit_name.clone()))?;

        let date = cmd.date.unwrap_or_else(|| Local::now().date_naive());
        let time = cmd.time.unwrap_or_else(|| Local::now().time());
        let periodicity = habit.periodicity();
        let key = PeriodKey::for_date(periodicity, date);

        // 2. A second check-off within the same period is a silent no-op
        if self.check_off_repo.exists(habit.name(), &key).await? {
            info!(
                "Habit '{}' already checked off for {}",
                habit.name(),
                key
            );
            return Ok(CheckOffOutcome::AlreadyCheckedOff {
                period: key.to_string(),
            });
        }

        // 3. Continue the previous period's counter or start a new streak
        let previous_key = PeriodKey::previous_for_date(periodicity, date);
        let streak = match self.check_off_repo.find(habit.name(), &previous_key).await? {
            Some(previous) => previous.streak() + 1,
            None => 1,
        };

        let event = match key {
            PeriodKey::Day(_) => {
                CheckOffEvent::daily(habit.name().to_string(), date, time, streak)
            }
            PeriodKey::Week(week) => {
                CheckOffEvent::weekly(habit.name().to_string(), date, time, week, streak)
            }
        };

        // 4. Append; a unique-constraint hit means a concurrent check-off won
        //    the race for this period, which collapses into the same no-op
        match self.check_off_repo.append(&event).await {
            Ok(()) => {
                info!(
                    "Habit '{}' checked off for {} (streak {})",
                    habit.name(),
                    key,
                    streak
                );
                Ok(CheckOffOutcome::Completed {
                    streak,
                    period: key.to_string(),
                })
            }
            Err(e) if e.is_constraint_violation() => Ok(CheckOffOutcome::AlreadyCheckedOff {
                period: key.to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}
