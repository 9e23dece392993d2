mod aggregate;
mod repository;


pub use aggregate::{Habit, Periodicity};
pub use repository::HabitRepository;
