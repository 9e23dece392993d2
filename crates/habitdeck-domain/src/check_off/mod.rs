mod event;
mod repository;


pub use event::{CalendarWeek, CheckOffEvent, PeriodKey};
pub use repository::{CheckOffRepository, SortOrder, StreakScope};
