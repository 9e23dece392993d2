pub mod check_off_repo;
pub mod habit_repo;
pub mod seed_flag_repo;

pub use check_off_repo::SqliteCheckOffRepository;
pub use habit_repo::SqliteHabitRepository;
pub use seed_flag_repo::SqliteSeedFlagRepository;
