//! Logic core of the Mindwell companion app: the guided worry decision tree
//! and HALT check-in analysis. The UI layer owns loading, saving and rendering.

pub mod error;
pub mod habits;
pub mod halt;
pub mod models;
pub mod settings;
pub mod utils;
pub mod worry;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

pub use error::{EntryError, WalkError};
pub use habits::{ensure_default_habit_exists, FileHabitStore, HabitStore, MemoryHabitStore};
pub use halt::{ConcernTally, HaltAnalyzer, HaltConfig, HaltReport, Need};
pub use models::{parse_entries, EntryKind, QaPair, ReflectionEntry};
pub use settings::{DefaultHabitSettings, SettingsStore, UserSettings};
pub use utils::logging::init_logging;
pub use worry::{WorryRecord, WorrySession, WorryState};

const ENABLE_LOGS: bool = true;

/// Application-level state, built once at startup.
pub struct Companion {
    settings: SettingsStore,
    habits: Box<dyn HabitStore + Send + Sync>,
}

impl Companion {
    /// Open settings and habits under `data_dir` and run first-launch setup.
    pub fn bootstrap(data_dir: &Path) -> Result<Self> {
        fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data dir {}", data_dir.display()))?;

        let settings = SettingsStore::new(data_dir.join("settings.json"))?;
        let habits = FileHabitStore::open(data_dir.join("habits.json"))?;

        Self::with_stores(settings, Box::new(habits))
    }

    /// Build from already-open stores, e.g. when the host app owns habit storage.
    pub fn with_stores(
        settings: SettingsStore,
        habits: Box<dyn HabitStore + Send + Sync>,
    ) -> Result<Self> {
        let created = ensure_default_habit_exists(habits.as_ref(), &settings.default_habit())
            .context("Failed to set up default habit")?;
        if created {
            log_info!("First launch: default habit created");
        }

        Ok(Self { settings, habits })
    }

    pub fn settings(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn habits(&self) -> &dyn HabitStore {
        self.habits.as_ref()
    }

    pub fn analyzer(&self) -> HaltAnalyzer {
        HaltAnalyzer::new(self.settings.halt_config())
    }

    /// HALT tally and insights over the `halt` entries among `entries`.
    pub fn halt_report(&self, entries: &[ReflectionEntry]) -> HaltReport {
        self.halt_report_at(entries, Utc::now())
    }

    pub fn halt_report_at(&self, entries: &[ReflectionEntry], now: DateTime<Utc>) -> HaltReport {
        let checks = models::filter_kind(entries, &EntryKind::Halt);
        self.analyzer().report_at(checks, now)
    }

    pub fn new_worry_session(&self) -> WorrySession {
        WorrySession::start()
    }
}
