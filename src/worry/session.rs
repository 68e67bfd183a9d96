use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::WalkError;
use crate::log_debug;
use crate::models::EntryKind;

use super::state::{self, WorryState};
use super::summary::{render_note, summarize};

const ENABLE_LOGS: bool = true;

/// Self-reported anxiety on a 0-10 scale.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnxietyRating(u8);

impl AnxietyRating {
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> Result<Self, WalkError> {
        if value > Self::MAX {
            return Err(WalkError::RatingOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for AnxietyRating {
    fn default() -> Self {
        Self(5)
    }
}

impl TryFrom<u8> for AnxietyRating {
    type Error = WalkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AnxietyRating> for u8 {
    fn from(rating: AnxietyRating) -> Self {
        rating.0
    }
}

impl fmt::Display for AnxietyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finished walk, ready to hand to the journal collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorryRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub outcome: WorryState,
    pub note: String,
    pub anxiety_before: AnxietyRating,
    pub anxiety_after: AnxietyRating,
}

impl WorryRecord {
    /// Positive when anxiety went up over the exercise.
    pub fn anxiety_change(&self) -> i8 {
        self.anxiety_after.value() as i8 - self.anxiety_before.value() as i8
    }
}

/// One pass through the worry decision tree, with everything the user typed along the way.
#[derive(Debug, Clone)]
pub struct WorrySession {
    id: Uuid,
    started_at: DateTime<Utc>,
    current: WorryState,
    history: Vec<WorryState>,
    worry: String,
    action_plan: Option<String>,
    anxiety_before: AnxietyRating,
    anxiety_after: Option<AnxietyRating>,
}

impl Default for WorrySession {
    fn default() -> Self {
        Self::start()
    }
}

impl WorrySession {
    pub fn start() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            current: WorryState::Start,
            history: Vec::new(),
            worry: String::new(),
            action_plan: None,
            anxiety_before: AnxietyRating::default(),
            anxiety_after: None,
        }
    }

    /// Throw away the current walk and begin again at `Start`.
    pub fn restart(&mut self) -> WorryState {
        log_debug!("Restarting worry session {}", self.id);
        *self = Self::start();
        self.current
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn current(&self) -> WorryState {
        self.current
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_terminal()
    }

    pub fn worry(&self) -> &str {
        &self.worry
    }

    pub fn action_plan(&self) -> Option<&str> {
        self.action_plan.as_deref()
    }

    pub fn anxiety_before(&self) -> AnxietyRating {
        self.anxiety_before
    }

    pub fn anxiety_after(&self) -> Option<AnxietyRating> {
        self.anxiety_after
    }

    /// Nodes visited so far, ending with the current one.
    pub fn path(&self) -> Vec<WorryState> {
        let mut path = self.history.clone();
        path.push(self.current);
        path
    }

    /// Record the worry and move from `Start` to the first question.
    pub fn submit_worry(&mut self, text: &str) -> Result<WorryState, WalkError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WalkError::EmptyWorry);
        }
        let next = state::choose(self.current, 0)?;
        self.worry = text.to_string();
        Ok(self.advance(next))
    }

    /// Answer the question at the current node. Leaving `Start` needs a worry first.
    pub fn choose(&mut self, option: usize) -> Result<WorryState, WalkError> {
        if self.current == WorryState::Start && self.worry.is_empty() {
            return Err(WalkError::EmptyWorry);
        }
        let next = state::choose(self.current, option)?;
        Ok(self.advance(next))
    }

    /// Step back to the previous node. Inputs collected so far are kept.
    pub fn back(&mut self) -> Result<WorryState, WalkError> {
        let previous = state::back(&mut self.history)?;
        log_debug!("Worry session {}: {} <- {}", self.id, previous, self.current);
        self.current = previous;
        Ok(previous)
    }

    pub fn set_action_plan(&mut self, plan: &str) {
        let plan = plan.trim();
        self.action_plan = (!plan.is_empty()).then(|| plan.to_string());
    }

    pub fn set_anxiety_before(&mut self, value: u8) -> Result<(), WalkError> {
        self.anxiety_before = AnxietyRating::new(value)?;
        Ok(())
    }

    pub fn set_anxiety_after(&mut self, value: u8) -> Result<(), WalkError> {
        self.anxiety_after = Some(AnxietyRating::new(value)?);
        Ok(())
    }

    /// After minus before, once both ratings are in.
    pub fn anxiety_change(&self) -> Option<i8> {
        self.anxiety_after
            .map(|after| after.value() as i8 - self.anxiety_before.value() as i8)
    }

    pub fn summary(&self) -> Result<String, WalkError> {
        summarize(self.current, &self.worry, self.action_plan.as_deref())
    }

    pub fn render_note(&self) -> Result<String, WalkError> {
        render_note(
            self.current,
            &self.worry,
            self.action_plan.as_deref(),
            self.anxiety_before,
            self.anxiety_after,
        )
    }

    /// Build the record to persist. Requires a terminal node and an after-rating.
    pub fn finish(&self) -> Result<WorryRecord, WalkError> {
        if !self.current.is_terminal() {
            return Err(WalkError::NotFinished(self.current));
        }
        let anxiety_after = self.anxiety_after.ok_or(WalkError::MissingAfterRating)?;
        let note = self.render_note()?;

        log_debug!(
            "Worry session {} finished at {} (anxiety {} -> {})",
            self.id,
            self.current,
            self.anxiety_before,
            anxiety_after
        );

        Ok(WorryRecord {
            id: self.id,
            created_at: Utc::now(),
            kind: EntryKind::WorryTree,
            outcome: self.current,
            note,
            anxiety_before: self.anxiety_before,
            anxiety_after,
        })
    }

    fn advance(&mut self, next: WorryState) -> WorryState {
        log_debug!("Worry session {}: {} -> {}", self.id, self.current, next);
        self.history.push(self.current);
        self.current = next;
        next
    }
}
