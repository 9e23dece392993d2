mod check_off_handler;
mod create_habit_handler;
mod delete_habit_handler;


pub use check_off_handler::CheckOffCommandHandler;
pub use create_habit_handler::CreateHabitCommandHandler;
pub use delete_habit_handler::DeleteHabitCommandHandler;
