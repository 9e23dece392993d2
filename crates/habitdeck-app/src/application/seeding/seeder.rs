use std::sync::Arc;
use tracing::info;

use habitdeck_domain::habit::{Habit, HabitRepository, Periodicity};
use habitdeck_domain::seeding::SeedFlagRepository;
use habitdeck_domain::shared::DomainError;

/// Starter habits inserted exactly once, on the first launch against a fresh
/// database.
const PREDEFINED_HABITS: &[(&str, &str, Periodicity)] = &[
    (
        "Finish Reading One Book",
        "Finish reading one book per week",
        Periodicity::Weekly,
    ),
    (
        "Culture-Night",
        "Visit a cultural event once a week",
        Periodicity::Weekly,
    ),
    (
        "Cut Toenails",
        "Trim your toenails once a week",
        Periodicity::Weekly,
    ),
    (
        "Water Your Plants",
        "Water the plants every day",
        Periodicity::Daily,
    ),
    (
        "Play An Instrument",
        "Practice an instrument every day",
        Periodicity::Daily,
    ),
    ("Meditate", "Meditate every day", Periodicity::Daily),
];

/// Insert the predefined habits unless the seed has already run. The flag is
/// set after the inserts, so a crash mid-seed retries on the next launch; the
/// per-habit exists guard keeps the retry from duplicating anything.
///
/// Returns the number of habits inserted.
pub async fn seed_predefined_habits(
    habit_repo: Arc<dyn HabitRepository>,
    seed_flag_repo: Arc<dyn SeedFlagRepository>,
) -> Result<u32, DomainError> {
    if seed_flag_repo.seed_completed().await? {
        info!("Predefined habits already seeded, skipping");
        return Ok(0);
    }

    let mut inserted = 0;
    for (name, description, periodicity) in PREDEFINED_HABITS {
        if habit_repo.exists(name).await? {
            continue;
        }
        let habit = Habit::new(name.to_string(), description.to_string(), *periodicity);
        habit_repo.save(&habit).await?;
        info!("Seeded predefined habit: {} ({})", name, periodicity);
        inserted += 1;
    }

    seed_flag_repo.mark_seed_completed().await?;
    info!("Seeding complete, {} habits inserted", inserted);

    Ok(inserted)
}
