mod check_off_dto;
mod habit_dto;
mod streak_dto;

pub use check_off_dto::{CheckOffDto, CheckOffOutcome};
pub use habit_dto::HabitDto;
pub use streak_dto::{CurrentStreakDto, LongestStreakDto, RecordStreakDto};
