use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use crate::models::Habit;

use super::HabitStore;

#[derive(Debug, Default)]
pub struct MemoryHabitStore {
    habits: RwLock<Vec<Habit>>,
}

impl HabitStore for MemoryHabitStore {
    fn list(&self) -> Result<Vec<Habit>> {
        Ok(self
            .habits
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn insert(&self, habit: Habit) -> Result<()> {
        self.habits
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(habit);
        Ok(())
    }
}

/// Habits kept as a pretty-printed JSON array on disk.
pub struct FileHabitStore {
    path: PathBuf,
    habits: RwLock<Vec<Habit>>,
}

impl FileHabitStore {
    pub fn open(path: PathBuf) -> Result<Self> {
        let habits = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read habits from {}", path.display()))?;
            // Unlike settings, a corrupt habit file is not silently replaced.
            serde_json::from_str(&contents)
                .with_context(|| format!("Malformed habits file {}", path.display()))?
        } else {
            Vec::new()
        };

        Ok(Self {
            path,
            habits: RwLock::new(habits),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, habits: &[Habit]) -> Result<()> {
        let serialized = serde_json::to_string_pretty(habits)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write habits to {}", self.path.display()))
    }
}

impl HabitStore for FileHabitStore {
    fn list(&self) -> Result<Vec<Habit>> {
        Ok(self
            .habits
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn insert(&self, habit: Habit) -> Result<()> {
        let mut guard = self.habits.write().unwrap_or_else(PoisonError::into_inner);
        guard.push(habit);
        if let Err(err) = self.persist(&guard) {
            guard.pop();
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn habit(name: &str) -> Habit {
        Habit {
            id: format!("id-{name}"),
            name: name.into(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");

        let store = FileHabitStore::open(path.clone()).unwrap();
        assert!(store.list().unwrap().is_empty());
        store.insert(habit("Meditate")).unwrap();

        let reopened = FileHabitStore::open(path).unwrap();
        let habits = reopened.list().unwrap();
        assert_eq!(habits.len(), 1);
        assert_eq!(habits[0].name, "Meditate");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("habits.json");
        fs::write(&path, "[{").unwrap();
        let err = FileHabitStore::open(path).err().unwrap();
        assert!(err.to_string().contains("Malformed habits file"));
    }

    #[test]
    fn failed_write_leaves_memory_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileHabitStore::open(dir.path().join("missing/habits.json")).unwrap();
        assert!(store.insert(habit("Walk")).is_err());
        assert!(store.list().unwrap().is_empty());
    }
}
