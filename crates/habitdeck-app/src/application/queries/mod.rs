mod habit_queries;
mod record_queries;
mod streak_queries;


pub use habit_queries::HabitQueries;
pub use record_queries::RecordStreakQueries;
pub use streak_queries::StreakQueries;
