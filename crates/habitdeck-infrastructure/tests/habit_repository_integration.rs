use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use habitdeck_domain::check_off::{CheckOffEvent, CheckOffRepository, PeriodKey};
use habitdeck_domain::habit::{Habit, HabitRepository, Periodicity};
use habitdeck_domain::shared::DomainError;
use habitdeck_infrastructure::persistence::repositories::{
    SqliteCheckOffRepository, SqliteHabitRepository,
};
use habitdeck_infrastructure::persistence::Database;

mod test_helpers;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).unwrap()
}

#[tokio::test]
async fn habit_repo_save_and_find_integration() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let habit = Habit::restore(
        "Meditate".to_string(),
        "meditate at least 30 minutes".to_string(),
        Periodicity::Daily,
        d(2024, 10, 1),
    );
    repo.save(&habit).await.expect("save habit");

    let found = repo
        .find_by_name("Meditate")
        .await
        .expect("find habit")
        .expect("habit should exist");
    assert_eq!(found, habit);

    assert!(repo.exists("Meditate").await.expect("exists"));
    assert!(!repo.exists("Unknown").await.expect("exists"));
    assert!(repo
        .find_by_name("Unknown")
        .await
        .expect("find missing")
        .is_none());
}

#[tokio::test]
async fn habit_repo_list_filters_by_periodicity() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    let daily = Habit::restore(
        "Water Your Plants".to_string(),
        "don't let them die".to_string(),
        Periodicity::Daily,
        d(2024, 10, 1),
    );
    let weekly_old = Habit::restore(
        "Finish Reading One Book".to_string(),
        "finish reading any book".to_string(),
        Periodicity::Weekly,
        d(2024, 9, 1),
    );
    let weekly_new = Habit::restore(
        "Culture-Night".to_string(),
        "visit theatre, opera, concert, ...".to_string(),
        Periodicity::Weekly,
        d(2024, 10, 15),
    );
    for habit in [&daily, &weekly_old, &weekly_new] {
        repo.save(habit).await.expect("save habit");
    }

    let all = repo.find_all(None).await.expect("list all");
    assert_eq!(all.len(), 3);
    // Ordered by periodicity, then creation date
    assert_eq!(all[0].name(), "Water Your Plants");
    assert_eq!(all[1].name(), "Finish Reading One Book");
    assert_eq!(all[2].name(), "Culture-Night");

    let weekly = repo
        .find_all(Some(Periodicity::Weekly))
        .await
        .expect("list weekly");
    assert_eq!(weekly.len(), 2);
    assert_eq!(weekly[0].name(), "Finish Reading One Book");
    assert_eq!(weekly[1].name(), "Culture-Night");
}

#[tokio::test]
async fn habit_repo_delete_cascade_removes_events() {
    let pool = test_helpers::setup_in_memory_db().await;
    let habit_repo = SqliteHabitRepository::new(Arc::new(pool.clone()));
    let check_off_repo = SqliteCheckOffRepository::new(Arc::new(pool.clone()));

    let habit = Habit::restore(
        "Meditate".to_string(),
        "meditate at least 30 minutes".to_string(),
        Periodicity::Daily,
        d(2024, 10, 1),
    );
    habit_repo.save(&habit).await.expect("save habit");

    for (day, streak) in [(20, 1), (21, 2), (22, 3)] {
        let event =
            CheckOffEvent::daily("Meditate".to_string(), d(2024, 11, day), t(8, 30), streak);
        check_off_repo.append(&event).await.expect("append event");
    }

    habit_repo
        .delete_cascade("Meditate")
        .await
        .expect("cascade delete");

    assert!(!habit_repo.exists("Meditate").await.expect("exists"));
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM check_offs")
        .fetch_one(&pool)
        .await
        .expect("count events");
    assert_eq!(remaining, 0);

    // Afterwards the habit behaves as never checked off
    let found = check_off_repo
        .find("Meditate", &PeriodKey::Day(d(2024, 11, 20)))
        .await
        .expect("find after delete");
    assert!(found.is_none());
}

#[tokio::test]
async fn habit_repo_delete_cascade_missing_habit_fails() {
    let pool = test_helpers::setup_in_memory_db().await;
    let repo = SqliteHabitRepository::new(Arc::new(pool));

    match repo.delete_cascade("Unknown").await {
        Err(DomainError::HabitNotFound(name)) => assert_eq!(name, "Unknown"),
        other => panic!("Expected HabitNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn habit_repo_file_backed_database() {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("nested").join("main.db");

    let db = Database::new(db_path.to_str().unwrap())
        .await
        .expect("open file-backed db");
    db.run_migrations().await.expect("run migrations");

    let repo = SqliteHabitRepository::new(Arc::new(db.pool().clone()));
    let habit = Habit::restore(
        "Finish Reading One Book".to_string(),
        "finish reading any book".to_string(),
        Periodicity::Weekly,
        d(2024, 10, 1),
    );
    repo.save(&habit).await.expect("save habit");

    let found = repo
        .find_by_name("Finish Reading One Book")
        .await
        .expect("find habit")
        .expect("habit should exist");
    assert_eq!(found.periodicity(), Periodicity::Weekly);
}
