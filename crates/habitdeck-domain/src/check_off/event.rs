use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::habit::Periodicity;
use crate::shared::DomainError;

/// ISO 8601 calendar week identifier. Weeks start on Monday; week 1 is the week
/// containing the year's first Thursday, so the ISO year can differ from the
/// calendar year of the date it was derived from.
///
/// Rendered as `"<week>-<year>"` without zero padding, e.g. `"5-2024"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarWeek {
    week: u32,
    year: i32,
}

impl CalendarWeek {
    pub fn new(week: u32, year: i32) -> Self {
        Self { week, year }
    }

    /// The ISO week containing the given date. Must be computed from the date,
    /// never guessed: a year boundary can shift the week number.
    pub fn from_date(date: NaiveDate) -> Self {
        let iso = date.iso_week();
        Self {
            week: iso.week(),
            year: iso.year(),
        }
    }

    pub fn week(&self) -> u32 {
        self.week
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for CalendarWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.week, self.year)
    }
}

impl FromStr for CalendarWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (week, year) = s.split_once('-').ok_or_else(|| {
            DomainError::InvalidInput(format!("Invalid calendar week key: {}", s))
        })?;
        let week = week.parse::<u32>().map_err(|e| {
            DomainError::InvalidInput(format!("Invalid week in key {}: {}", s, e))
        })?;
        let year = year.parse::<i32>().map_err(|e| {
            DomainError::InvalidInput(format!("Invalid year in key {}: {}", s, e))
        })?;
        Ok(Self { week, year })
    }
}

/// Identifier of the tracking bucket a check-off belongs to:
/// the date itself for daily habits, the ISO week for weekly habits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodKey {
    Day(NaiveDate),
    Week(CalendarWeek),
}

impl PeriodKey {
    /// The key of the period containing `date` under the given periodicity
    pub fn for_date(periodicity: Periodicity, date: NaiveDate) -> Self {
        match periodicity {
            Periodicity::Daily => PeriodKey::Day(date),
            Periodicity::Weekly => PeriodKey::Week(CalendarWeek::from_date(date)),
        }
    }

    /// The key of the period immediately before the one containing `date`.
    /// One day back for daily habits, seven days back for weekly ones, with
    /// the week key recomputed from the shifted date.
    pub fn previous_for_date(periodicity: Periodicity, date: NaiveDate) -> Self {
        match periodicity {
            Periodicity::Daily => PeriodKey::Day(date - chrono::Duration::days(1)),
            Periodicity::Weekly => {
                PeriodKey::Week(CalendarWeek::from_date(date - chrono::Duration::days(7)))
            }
        }
    }

    pub fn periodicity(&self) -> Periodicity {
        match self {
            PeriodKey::Day(_) => Periodicity::Daily,
            PeriodKey::Week(_) => Periodicity::Weekly,
        }
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            PeriodKey::Week(week) => write!(f, "{}", week),
        }
    }
}

/// One immutable completion event. Carries the streak counter as of this
/// period: 1 when the previous period has no event, previous counter + 1
/// otherwise. The time of day is informational only and never enters streak
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOffEvent {
    id: String,
    habit_name: String,
    date: NaiveDate,
    time: NaiveTime,
    calendar_week: Option<CalendarWeek>,
    streak: u32,
}

impl CheckOffEvent {
    /// New daily check-off carrying the given day-streak counter
    pub fn daily(habit_name: String, date: NaiveDate, time: NaiveTime, streak: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            habit_name,
            date,
            time,
            calendar_week: None,
            streak,
        }
    }

    /// New weekly check-off carrying the given week-streak counter
    pub fn weekly(
        habit_name: String,
        date: NaiveDate,
        time: NaiveTime,
        calendar_week: CalendarWeek,
        streak: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            habit_name,
            date,
            time,
            calendar_week: Some(calendar_week),
            streak,
        }
    }

    /// Restore an event from persisted state
    pub fn restore(
        id: String,
        habit_name: String,
        date: NaiveDate,
        time: NaiveTime,
        calendar_week: Option<CalendarWeek>,
        streak: u32,
    ) -> Self {
        Self {
            id,
            habit_name,
            date,
            time,
            calendar_week,
            streak,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn habit_name(&self) -> &str {
        &self.habit_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn calendar_week(&self) -> Option<CalendarWeek> {
        self.calendar_week
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn periodicity(&self) -> Periodicity {
        match self.calendar_week {
            Some(_) => Periodicity::Weekly,
            None => Periodicity::Daily,
        }
    }

    /// The tracking bucket this event fills
    pub fn period_key(&self) -> PeriodKey {
        match self.calendar_week {
            Some(week) => PeriodKey::Week(week),
            None => PeriodKey::Day(self.date),
        }
    }
}
