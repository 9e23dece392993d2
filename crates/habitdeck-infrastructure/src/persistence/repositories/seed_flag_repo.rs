use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::persistence::repository_base::map_sqlx_error;
use habitdeck_domain::seeding::SeedFlagRepository;
use habitdeck_domain::shared::DomainError;

pub struct SqliteSeedFlagRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteSeedFlagRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeedFlagRepository for SqliteSeedFlagRepository {
    async fn seed_completed(&self) -> Result<bool, DomainError> {
        let row: Option<i64> = sqlx::query_scalar("SELECT completed FROM seed_flag WHERE id = 1")
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("Read seed flag", e))?;

        Ok(matches!(row, Some(1)))
    }

    async fn mark_seed_completed(&self) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO seed_flag (id, completed) VALUES (1, 1) \
             ON CONFLICT(id) DO UPDATE SET completed = 1",
        )
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("Write seed flag", e))?;

        Ok(())
    }
}
