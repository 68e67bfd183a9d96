//! Habit storage seam and the first-launch "ensure default habit" command.

mod store;

pub use store::{FileHabitStore, MemoryHabitStore};

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use crate::log_info;
use crate::models::Habit;
use crate::settings::DefaultHabitSettings;

const ENABLE_LOGS: bool = true;

/// Storage for the user's habits. The host app supplies the real backend.
pub trait HabitStore {
    fn list(&self) -> Result<Vec<Habit>>;
    fn insert(&self, habit: Habit) -> Result<()>;
}

/// Create the default habit unless one with the same name (any case) already exists.
///
/// Returns `true` when a habit was created.
pub fn ensure_default_habit_exists<S>(store: &S, defaults: &DefaultHabitSettings) -> Result<bool>
where
    S: HabitStore + ?Sized,
{
    let wanted = defaults.name.trim();
    let exists = store
        .list()?
        .iter()
        .any(|habit| habit.name.trim().eq_ignore_ascii_case(wanted));
    if exists {
        return Ok(false);
    }

    let habit = Habit {
        id: Uuid::new_v4().to_string(),
        name: wanted.to_string(),
        description: defaults.description.clone(),
        created_at: Utc::now(),
    };
    log_info!("Creating default habit \"{}\" ({})", habit.name, habit.id);
    store.insert(habit)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_once() {
        let store = MemoryHabitStore::default();
        let defaults = DefaultHabitSettings::default();

        assert!(ensure_default_habit_exists(&store, &defaults).unwrap());
        assert!(!ensure_default_habit_exists(&store, &defaults).unwrap());

        let habits = store.list().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Daily Reflection");
    }

    #[test]
    fn existing_habit_matches_case_insensitively() {
        let store = MemoryHabitStore::default();
        store
            .insert(Habit {
                id: "h1".into(),
                name: "daily reflection ".into(),
                description: None,
                created_at: Utc::now(),
            })
            .unwrap();

        let created =
            ensure_default_habit_exists(&store, &DefaultHabitSettings::default()).unwrap();
        assert!(!created);
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn works_through_trait_object() {
        let store: Box<dyn HabitStore> = Box::new(MemoryHabitStore::default());
        assert!(ensure_default_habit_exists(store.as_ref(), &DefaultHabitSettings::default()).unwrap());
    }
}
