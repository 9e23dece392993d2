//! Hand-rolled in-memory repositories for handler and query tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use habitdeck_domain::check_off::{
    CheckOffEvent, CheckOffRepository, PeriodKey, SortOrder, StreakScope,
};
use habitdeck_domain::habit::{Habit, HabitRepository, Periodicity};
use habitdeck_domain::seeding::SeedFlagRepository;
use habitdeck_domain::shared::DomainError;

#[derive(Default)]
pub struct InMemoryCheckOffRepository {
    events: RwLock<Vec<CheckOffEvent>>,
}

impl InMemoryCheckOffRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn event_count(&self, habit_name: &str) -> usize {
        self.events
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.habit_name() == habit_name)
            .count()
    }

    fn remove_for_habit(&self, habit_name: &str) {
        self.events
            .write()
            .unwrap()
            .retain(|e| e.habit_name() != habit_name);
    }

    fn in_scope(event: &CheckOffEvent, scope: &StreakScope, periodicity: Periodicity) -> bool {
        if event.periodicity() != periodicity {
            return false;
        }
        match scope {
            StreakScope::Habit(name) => event.habit_name() == name,
            StreakScope::AllHabits => true,
        }
    }
}

#[async_trait]
impl CheckOffRepository for InMemoryCheckOffRepository {
    async fn find(
        &self,
        habit_name: &str,
        key: &PeriodKey,
    ) -> Result<Option<CheckOffEvent>, DomainError> {
        Ok(self
            .events
            .read()
            .unwrap()
            .iter()
            .find(|e| e.habit_name() == habit_name && e.period_key() == *key)
            .cloned())
    }

    async fn exists(&self, habit_name: &str, key: &PeriodKey) -> Result<bool, DomainError> {
        Ok(self.find(habit_name, key).await?.is_some())
    }

    async fn append(&self, event: &CheckOffEvent) -> Result<(), DomainError> {
        let mut events = self.events.write().unwrap();
        if events
            .iter()
            .any(|e| e.habit_name() == event.habit_name() && e.period_key() == event.period_key())
        {
            return Err(DomainError::ConstraintViolation(format!(
                "duplicate check-off for habit '{}' in period {}",
                event.habit_name(),
                event.period_key()
            )));
        }
        events.push(event.clone());
        Ok(())
    }

    async fn list_for_habit(&self, habit_name: &str) -> Result<Vec<CheckOffEvent>, DomainError> {
        let mut events: Vec<CheckOffEvent> = self
            .events
            .read()
            .unwrap()
            .iter()
            .filter(|e| e.habit_name() == habit_name)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.date());
        Ok(events)
    }

    async fn max_streak(
        &self,
        scope: StreakScope,
        periodicity: Periodicity,
    ) -> Result<u32, DomainError> {
        Ok(self
            .events
            .read()
            .unwrap()
            .iter()
            .filter(|e| Self::in_scope(e, &scope, periodicity))
            .map(|e| e.streak())
            .max()
            .unwrap_or(0))
    }

    async fn find_with_streak(
        &self,
        scope: StreakScope,
        periodicity: Periodicity,
        streak: u32,
        order: SortOrder,
    ) -> Result<Vec<CheckOffEvent>, DomainError> {
        let mut events: Vec<CheckOffEvent> = self
            .events
            .read()
            .unwrap()
            .iter()
            .filter(|e| Self::in_scope(e, &scope, periodicity) && e.streak() == streak)
            .cloned()
            .collect();
        match order {
            SortOrder::DateAsc => events.sort_by_key(|e| e.date()),
            SortOrder::DateDesc => events.sort_by_key(|e| std::cmp::Reverse(e.date())),
        }
        Ok(events)
    }
}

pub struct InMemoryHabitRepository {
    habits: RwLock<HashMap<String, Habit>>,
    check_offs: Option<Arc<InMemoryCheckOffRepository>>,
}

impl InMemoryHabitRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            habits: RwLock::new(HashMap::new()),
            check_offs: None,
        })
    }

    /// Variant wired to a check-off store so `delete_cascade` behaves like
    /// the real implementation.
    pub fn with_check_offs(check_offs: Arc<InMemoryCheckOffRepository>) -> Arc<Self> {
        Arc::new(Self {
            habits: RwLock::new(HashMap::new()),
            check_offs: Some(check_offs),
        })
    }
}

#[async_trait]
impl HabitRepository for InMemoryHabitRepository {
    async fn save(&self, habit: &Habit) -> Result<(), DomainError> {
        self.habits
            .write()
            .unwrap()
            .insert(habit.name().to_string(), habit.clone());
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Habit>, DomainError> {
        Ok(self.habits.read().unwrap().get(name).cloned())
    }

    async fn find_all(&self, periodicity: Option<Periodicity>) -> Result<Vec<Habit>, DomainError> {
        let mut habits: Vec<Habit> = self
            .habits
            .read()
            .unwrap()
            .values()
            .filter(|h| periodicity.map_or(true, |p| h.periodicity() == p))
            .cloned()
            .collect();
        habits.sort_by(|a, b| {
            a.periodicity()
                .as_str()
                .cmp(b.periodicity().as_str())
                .then(a.create_date().cmp(&b.create_date()))
                .then(a.name().cmp(b.name()))
        });
        Ok(habits)
    }

    async fn exists(&self, name: &str) -> Result<bool, DomainError> {
        Ok(self.habits.read().unwrap().contains_key(name))
    }

    async fn delete_cascade(&self, name: &str) -> Result<(), DomainError> {
        let removed = self.habits.write().unwrap().remove(name);
        if removed.is_none() {
            return Err(DomainError::HabitNotFound(name.to_string()));
        }
        if let Some(check_offs) = &self.check_offs {
            check_offs.remove_for_habit(name);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySeedFlagRepository {
    completed: RwLock<bool>,
}

impl InMemorySeedFlagRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl SeedFlagRepository for InMemorySeedFlagRepository {
    async fn seed_completed(&self) -> Result<bool, DomainError> {
        Ok(*self.completed.read().unwrap())
    }

    async fn mark_seed_completed(&self) -> Result<(), DomainError> {
        *self.completed.write().unwrap() = true;
        Ok(())
    }
}
