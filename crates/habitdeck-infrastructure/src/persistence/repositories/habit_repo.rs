use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, SqlitePool};
use std::str::FromStr;
use std::sync::Arc;

use crate::persistence::repository_base::map_sqlx_error;
use crate::persistence::SqliteRepositoryBase;
use habitdeck_domain::habit::{Habit, HabitRepository, Periodicity};
use habitdeck_domain::shared::DomainError;

#[derive(FromRow)]
struct HabitRow {
    name: String,
    description: String,
    periodicity: String,
    create_date: String,
}

impl HabitRow {
    fn try_into_habit(self) -> Result<Habit, DomainError> {
        let periodicity = Periodicity::from_str(&self.periodicity).map_err(|_| {
            DomainError::DataIntegrity(format!(
                "Invalid periodicity for habit {}: {}",
                self.name, self.periodicity
            ))
        })?;
        let create_date = NaiveDate::parse_from_str(&self.create_date, "%Y-%m-%d").map_err(|e| {
            DomainError::DataIntegrity(format!(
                "Invalid create_date for habit {}: {} ({})",
                self.name, self.create_date, e
            ))
        })?;

        Ok(Habit::restore(
            self.name,
            self.description,
            periodicity,
            create_date,
        ))
    }
}

pub struct SqliteHabitRepository {
    base: SqliteRepositoryBase,
}

impl SqliteHabitRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self {
            base: SqliteRepositoryBase::new(pool),
        }
    }
}

#[async_trait]
impl HabitRepository for SqliteHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        let query = r#"
            INSERT OR REPLACE INTO habits (name, description, periodicity, create_date)
            VALUES (?1, ?2, ?3, ?4)
        "#;

        self.base
            .execute(
                sqlx::query(query)
                    .bind(habit.name())
                    .bind(habit.description())
                    .bind(habit.periodicity().as_str())
                    .bind(habit.create_date().format("%Y-%m-%d").to_string()),
                "Save habit",
            )
            .await?;

        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Habit>, DomainError> {
        let query = r#"
            SELECT name, description, periodicity, create_date
            FROM habits
            WHERE name = ?1
        "#;

        let row: Option<HabitRow> = self
            .base
            .fetch_optional(sqlx::query_as(query).bind(name), "Find habit by name")
            .await?;

        row.map(|r| r.try_into_habit()).transpose()
    }

    async fn find_all(&self, periodicity: Option<Periodicity>) -> Result<Vec<Habit>, DomainError> {
        let query = match periodicity {
            Some(_) => {
                r#"
                SELECT name, description, periodicity, create_date
                FROM habits
                WHERE periodicity = ?1
                ORDER BY periodicity, create_date
                "#
            }
            None => {
                r#"
                SELECT name, description, periodicity, create_date
                FROM habits
                ORDER BY periodicity, create_date
                "#
            }
        };

        let mut q = sqlx::query_as::<_, HabitRow>(query);
        if let Some(periodicity) = periodicity {
            q = q.bind(periodicity.as_str());
        }

        let rows = self.base.fetch_all(q, "List habits").await?;
        rows.into_iter().map(HabitRow::try_into_habit).collect()
    }

    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        let row: Option<i64> = sqlx::query_scalar("SELECT 1 FROM habits WHERE name = ?1")
            .bind(name)
            .fetch_optional(self.base.pool())
            .await
            .map_err(|e| map_sqlx_error("Check habit exists", e))?;

        Ok(row.is_some())
    }

    async fn delete_cascade(&self, name: &str) -> Result<(), DomainError> {
        let mut tx = self
            .base
            .pool()
            .begin()
            .await
            .map_err(|e| map_sqlx_error("Begin habit delete", e))?;

        // Events first: check_offs references habits(name)
        sqlx::query("DELETE FROM check_offs WHERE habit_name = ?1")
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("Delete habit check-offs", e))?;

        let result = sqlx::query("DELETE FROM habits WHERE name = ?1")
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("Delete habit", e))?;

        if result.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| map_sqlx_error("Rollback habit delete", e))?;
            return Err(DomainError::HabitNotFound(name.to_string()));
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("Commit habit delete", e))?;

        Ok(())
    }
}
