use chrono::{Duration, Local, NaiveTime};
use std::sync::Arc;
use tracing::info;

use crate::application::commands::habit_commands::CheckOffCommand;
use crate::application::commands::handlers::CheckOffCommandHandler;
use crate::application::commands::CommandHandler;
use habitdeck_domain::habit::{Habit, HabitRepository, Periodicity};
use habitdeck_domain::shared::DomainError;

/// Marker prefix identifying demo habits, so they can be removed in one sweep
/// without touching the user's own habits.
pub const DEMO_PREFIX: &str = "DEMO - ";

/// One demo habit with its check-off history expressed as day offsets from
/// today, oldest first. Gaps in the offsets produce streak resets, so each
/// habit demonstrates a different streak shape.
struct DemoHabit {
    name: &'static str,
    description: &'static str,
    periodicity: Periodicity,
    days_back: &'static [i64],
}

const DEMO_HABITS: &[DemoHabit] = &[
    // three consecutive weeks, still running into last week
    DemoHabit {
        name: "DEMO - Finish Reading One Book",
        description: "Finish reading one book per week",
        periodicity: Periodicity::Weekly,
        days_back: &[21, 14, 7],
    },
    DemoHabit {
        name: "DEMO - Culture-Night",
        description: "Visit a cultural event once a week",
        periodicity: Periodicity::Weekly,
        days_back: &[14, 7],
    },
    DemoHabit {
        name: "DEMO - Cut Toenails",
        description: "Trim your toenails once a week",
        periodicity: Periodicity::Weekly,
        days_back: &[14, 7],
    },
    // long run broken twice, current streak alive
    DemoHabit {
        name: "DEMO - Water Your Plants",
        description: "Water the plants every day",
        periodicity: Periodicity::Daily,
        days_back: &[14, 13, 12, 11, 10, 8, 7, 5, 4, 3, 2, 1],
    },
    // streak that died a week ago, plus a fresh restart
    DemoHabit {
        name: "DEMO - Play An Instrument",
        description: "Practice an instrument every day",
        periodicity: Periodicity::Daily,
        days_back: &[15, 14, 12, 11, 10, 8, 7, 1],
    },
    // an old record streak far in the past, barely restarted now
    DemoHabit {
        name: "DEMO - Meditate",
        description: "Meditate every day",
        periodicity: Periodicity::Daily,
        days_back: &[40, 39, 38, 36, 35, 34, 30, 29, 28, 27, 26, 2, 1],
    },
];

fn demo_time(offset: i64) -> NaiveTime {
    let hour = ((8 + offset) % 24) as u32;
    let minute = ((offset * 7) % 60) as u32;
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Create the demo habits and replay their histories through the normal
/// check-off path, oldest event first so the streak counters accumulate the
/// same way live usage would.
///
/// Returns the number of check-off events recorded.
pub async fn load_demo_data(
    habit_repo: Arc<dyn HabitRepository>,
    handler: &CheckOffCommandHandler,
) -> Result<u32, DomainError> {
    let today = Local::now().date_naive();
    let mut recorded = 0;

    for demo in DEMO_HABITS {
        if !habit_repo.exists(demo.name).await? {
            let habit = Habit::new(
                demo.name.to_string(),
                demo.description.to_string(),
                demo.periodicity,
            );
            habit_repo.save(&habit).await?;
        }

        for &offset in demo.days_back {
            let cmd = CheckOffCommand {
                habit_name: demo.name.to_string(),
                date: Some(today - Duration::days(offset)),
                time: Some(demo_time(offset)),
            };
            handler.handle(cmd).await?;
            recorded += 1;
        }
    }

    info!(
        "Demo data loaded: {} habits, {} check-offs",
        DEMO_HABITS.len(),
        recorded
    );
    Ok(recorded)
}

/// Delete every habit carrying the demo prefix, cascading to its events.
/// Returns the number of habits removed.
pub async fn remove_demo_data(habit_repo: Arc<dyn HabitRepository>) -> Result<u32, DomainError> {
    let mut removed = 0;
    for habit in habit_repo.find_all(None).await? {
        if habit.name().starts_with(DEMO_PREFIX) {
            habit_repo.delete_cascade(habit.name()).await?;
            removed += 1;
        }
    }

    info!("Demo data removed: {} habits", removed);
    Ok(removed)
}
