pub mod repositories;

mod database;
mod repository_base;

pub use database::{Database, MIGRATOR};
pub use repository_base::SqliteRepositoryBase;
