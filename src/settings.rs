use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use crate::halt::HaltConfig;
use crate::log_warn;

const ENABLE_LOGS: bool = true;

/// Habit created on first launch so reflection has somewhere to count streaks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultHabitSettings {
    pub name: String,
    pub description: Option<String>,
}

impl Default for DefaultHabitSettings {
    fn default() -> Self {
        Self {
            name: "Daily Reflection".into(),
            description: Some("Take a few minutes to journal or check in with yourself.".into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UserSettings {
    pub halt: HaltConfig,
    pub default_habit: DefaultHabitSettings,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    /// Load settings from `path`, starting from defaults when the file is missing or unreadable JSON.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!(
                    "Ignoring malformed settings at {}: {}; using defaults",
                    path.display(),
                    err
                );
                UserSettings::default()
            })
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> UserSettings {
        self.data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn halt_config(&self) -> HaltConfig {
        self.snapshot().halt
    }

    pub fn default_habit(&self) -> DefaultHabitSettings {
        self.snapshot().default_habit
    }

    pub fn update_halt_config(&self, config: HaltConfig) -> Result<()> {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        guard.halt = config;
        self.persist(&guard)
    }

    pub fn update_default_habit(&self, habit: DefaultHabitSettings) -> Result<()> {
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        guard.default_habit = habit;
        self.persist(&guard)
    }

    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let data: UserSettings = serde_json::from_str(&contents)
            .with_context(|| format!("Malformed settings in {}", self.path.display()))?;
        let mut guard = self.data.write().unwrap_or_else(PoisonError::into_inner);
        *guard = data;
        Ok(())
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
