use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::DomainError;

/// Tracking cadence of a habit: once per calendar day or once per ISO calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    Daily,
    Weekly,
}

impl Periodicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            other => Err(DomainError::InvalidInput(format!(
                "Unknown periodicity: {}",
                other
            ))),
        }
    }
}

/// A tracked habit. The name is the identity; check-off events reference it and
/// never outlive it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    name: String,
    description: String,
    periodicity: Periodicity,
    create_date: NaiveDate,
}

impl Habit {
    /// Create a new habit with today's date as creation date
    pub fn new(name: String, description: String, periodicity: Periodicity) -> Self {
        Self {
            name,
            description,
            periodicity,
            create_date: Local::now().date_naive(),
        }
    }

    /// Restore a habit from persisted state
    pub fn restore(
        name: String,
        description: String,
        periodicity: Periodicity,
        create_date: NaiveDate,
    ) -> Self {
        Self {
            name,
            description,
            periodicity,
            create_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    pub fn create_date(&self) -> NaiveDate {
        self.create_date
    }
}
