use habitdeck_domain::shared::DomainError;
use sqlx::query::{Query, QueryAs, QueryScalar};
use sqlx::sqlite::{SqliteArguments, SqliteQueryResult, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};
use std::sync::Arc;

/// Shared query execution for the SQLite repositories: runs a prepared query
/// against the pool and maps `sqlx::Error` into the domain taxonomy, tagging
/// the failure with the operation it belongs to.
pub struct SqliteRepositoryBase {
    pool: Arc<SqlitePool>,
}

impl SqliteRepositoryBase {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn execute<'q>(
        &self,
        query: Query<'q, Sqlite, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<SqliteQueryResult, DomainError> {
        query
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(context, e))
    }

    pub async fn fetch_optional<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Option<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_optional(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(context, e))
    }

    pub async fn fetch_all<'q, T>(
        &self,
        query: QueryAs<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<Vec<T>, DomainError>
    where
        T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        query
            .fetch_all(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(context, e))
    }

    pub async fn fetch_scalar<'q, T>(
        &self,
        query: QueryScalar<'q, Sqlite, T, SqliteArguments<'q>>,
        context: &str,
    ) -> Result<T, DomainError>
    where
        (T,): for<'r> FromRow<'r, SqliteRow>,
        T: Send + Unpin,
    {
        query
            .fetch_one(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error(context, e))
    }
}

/// A unique-index hit means the period is already filled; everything else is a
/// plain repository failure.
pub(crate) fn map_sqlx_error(context: &str, e: sqlx::Error) -> DomainError {
    match &e {
        sqlx::Error::Database(db_err)
            if matches!(db_err.kind(), sqlx::error::ErrorKind::UniqueViolation) =>
        {
            DomainError::ConstraintViolation(format!("{}: {}", context, db_err.message()))
        }
        _ => DomainError::Repository(format!("{}: {}", context, e)),
    }
}
