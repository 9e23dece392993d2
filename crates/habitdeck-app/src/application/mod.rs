pub mod commands;
pub mod dtos;
pub mod queries;
pub mod seeding;

#[cfg(test)]
pub(crate) mod test_support;
