mod demo_data;
mod seeder;


pub use demo_data::{load_demo_data, remove_demo_data, DEMO_PREFIX};
pub use seeder::seed_predefined_habits;
