use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::persistence::SqliteRepositoryBase;
use habitdeck_domain::check_off::{
    CalendarWeek, CheckOffEvent, CheckOffRepository, PeriodKey, SortOrder, StreakScope,
};
use habitdeck_domain::habit::Periodicity;
use habitdeck_domain::shared::DomainError;

const EVENT_COLUMNS: &str =
    "id, habit_name, check_off_date, check_off_time, streak_day_count, calendar_week, streak_week_count";

#[derive(FromRow)]
struct CheckOffRow {
    id: String,
    habit_name: String,
    check_off_date: String,
    check_off_time: String,
    streak_day_count: Option<i64>,
    calendar_week: Option<String>,
    streak_week_count: Option<i64>,
}

impl CheckOffRow {
    fn try_into_event(self) -> Result<CheckOffEvent, DomainError> {
        let date = NaiveDate::parse_from_str(&self.check_off_date, "%Y-%m-%d").map_err(|e| {
            DomainError::DataIntegrity(format!(
                "Invalid check_off_date: {} ({})",
                self.check_off_date, e
            ))
        })?;
        let time = NaiveTime::parse_from_str(&self.check_off_time, "%H:%M").map_err(|e| {
            DomainError::DataIntegrity(format!(
                "Invalid check_off_time: {} ({})",
                self.check_off_time, e
            ))
        })?;

        let (calendar_week, raw_streak) = match self.calendar_week {
            Some(week) => {
                let week: CalendarWeek = week.parse().map_err(|e: DomainError| {
                    DomainError::DataIntegrity(e.message().to_string())
                })?;
                let streak = self.streak_week_count.ok_or_else(|| {
                    DomainError::DataIntegrity(format!(
                        "Weekly event {} has no streak_week_count",
                        self.id
                    ))
                })?;
                (Some(week), streak)
            }
            None => {
                let streak = self.streak_day_count.ok_or_else(|| {
                    DomainError::DataIntegrity(format!(
                        "Daily event {} has no streak_day_count",
                        self.id
                    ))
                })?;
                (None, streak)
            }
        };

        let streak = u32::try_from(raw_streak).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Streak counter out of range for event {}: {}",
                self.id, raw_streak
            ))
        })?;

        Ok(CheckOffEvent::restore(
            self.id,
            self.habit_name,
            date,
            time,
            calendar_week,
            streak,
        ))
    }
}

pub struct SqliteCheckOffRepository {
    base: SqliteRepositoryBase,
}

impl SqliteCheckOffRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

fn streak_column(periodicity: Periodicity) -> &'static str {
    match periodicity {
        Periodicity::Daily => "streak_day_count",
        Periodicity::Weekly => "streak_week_count",
    }
}

#[async_trait]
impl CheckOffRepository for SqliteCheckOffRepository {
    async fn find(
        &self,
        habit_name: &str,
        key: &PeriodKey,
    ) -> Result<Option<CheckOffEvent>, DomainError> {
        let row: Option<CheckOffRow> = match key {
            PeriodKey::Day(date) => {
                let query = format!(
                    "SELECT {EVENT_COLUMNS} FROM check_offs \
                     WHERE habit_name = ?1 AND check_off_date = ?2 AND calendar_week IS NULL"
                );
                self.base
                    .fetch_optional(
                        sqlx::query_as(&query)
                            .bind(habit_name)
                            .bind(date.format("%Y-%m-%d").to_string()),
                        "Find daily check-off",
                    )
                    .await?
            }
            PeriodKey::Week(week) => {
                let query = format!(
                    "SELECT {EVENT_COLUMNS} FROM check_offs \
                     WHERE habit_name = ?1 AND calendar_week = ?2"
                );
                self.base
                    .fetch_optional(
                        sqlx::query_as(&query)
                            .bind(habit_name)
                            .bind(week.to_string()),
                        "Find weekly check-off",
                    )
                    .await?
            }
        };

        row.map(CheckOffRow::try_into_event).transpose()
    }

    async fn exists(&self, habit_name: &str, key: &PeriodKey) -> Result<bool, DomainError> {
        Ok(self.find(habit_name, key).await?.is_some())
    }

    async fn append(&self, event: &CheckOffEvent) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO check_offs (
                id,
                habit_name,
                check_off_date,
                check_off_time,
                streak_day_count,
                calendar_week,
                streak_week_count
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
        "#;

        let (streak_day_count, streak_week_count) = match event.periodicity() {
            Periodicity::Daily => (Some(event.streak() as i64), None),
            Periodicity::Weekly => (None, Some(event.streak() as i64)),
        };

        self.base
            .execute(
                sqlx::query(query)
                    .bind(event.id())
                    .bind(event.habit_name())
                    .bind(event.date().format("%Y-%m-%d").to_string())
                    .bind(event.time().format("%H:%M").to_string())
                    .bind(streak_day_count)
                    .bind(event.calendar_week().map(|w| w.to_string()))
                    .bind(streak_week_count),
                "Append check-off",
            )
            .await?;

        Ok(())
    }

    async fn list_for_habit(&self, habit_name: &str) -> Result<Vec<CheckOffEvent>, DomainError> {
        let query = format!(
            "SELECT {EVENT_COLUMNS} FROM check_offs \
             WHERE habit_name = ?1 ORDER BY check_off_date ASC"
        );

        let rows: Vec<CheckOffRow> = self
            .base
            .fetch_all(
                sqlx::query_as(&query).bind(habit_name),
                "List habit check-offs",
            )
            .await?;

        rows.into_iter().map(CheckOffRow::try_into_event).collect()
    }

    async fn max_streak(
        &self,
        scope: StreakScope,
        periodicity: Periodicity,
    ) -> Result<u32, DomainError> {
        let column = streak_column(periodicity);
        let query = match &scope {
            StreakScope::Habit(_) => format!(
                "SELECT COALESCE(MAX({column}), 0) FROM check_offs WHERE habit_name = ?1"
            ),
            StreakScope::AllHabits => {
                format!("SELECT COALESCE(MAX({column}), 0) FROM check_offs")
            }
        };

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let StreakScope::Habit(name) = &scope {
            q = q.bind(name.as_str());
        }

        let max = self.base.fetch_scalar(q, "Max streak").await?;
        Ok(u32::try_from(max).unwrap_or(0))
    }

    async fn find_with_streak(
        &self,
        scope: StreakScope,
        periodicity: Periodicity,
        streak: u32,
        order: SortOrder,
    ) -> Result<Vec<CheckOffEvent>, DomainError> {
        let column = streak_column(periodicity);
        let direction = match order {
            SortOrder::DateAsc => "ASC",
            SortOrder::DateDesc => "DESC",
        };

        let query = match &scope {
            StreakScope::Habit(_) => format!(
                "SELECT {EVENT_COLUMNS} FROM check_offs \
                 WHERE {column} = ?1 AND habit_name = ?2 \
                 ORDER BY check_off_date {direction}"
            ),
            StreakScope::AllHabits => format!(
                "SELECT {EVENT_COLUMNS} FROM check_offs \
                 WHERE {column} = ?1 \
                 ORDER BY check_off_date {direction}"
            ),
        };

        let mut q = sqlx::query_as::<_, CheckOffRow>(&query).bind(streak as i64);
        if let StreakScope::Habit(name) = &scope {
            q = q.bind(name.as_str());
        }

        let rows = self.base.fetch_all(q, "Find check-offs with streak").await?;
        rows.into_iter().map(CheckOffRow::try_into_event).collect()
    }
}
