use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use habitdeck_infrastructure::persistence::MIGRATOR;

/// In-memory database with the full schema applied. Pinned to one connection:
/// every pooled `:memory:` connection is a distinct database.
pub async fn setup_in_memory_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("connect in-memory db");

    MIGRATOR.run(&pool).await.expect("run migrations");

    pool
}
