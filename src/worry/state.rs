use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WalkError;

/// Node of the worry decision tree.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum WorryState {
    #[default]
    Start,
    IsReal,
    CanControl,
    CanActNow,
    ActionNow,
    ScheduleLater,
    LetGo,
    LetGoHypothetical,
}

impl WorryState {
    pub const ALL: [WorryState; 8] = [
        WorryState::Start,
        WorryState::IsReal,
        WorryState::CanControl,
        WorryState::CanActNow,
        WorryState::ActionNow,
        WorryState::ScheduleLater,
        WorryState::LetGo,
        WorryState::LetGoHypothetical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorryState::Start => "start",
            WorryState::IsReal => "is-real",
            WorryState::CanControl => "can-control",
            WorryState::CanActNow => "can-act-now",
            WorryState::ActionNow => "action-now",
            WorryState::ScheduleLater => "schedule-later",
            WorryState::LetGo => "let-go",
            WorryState::LetGoHypothetical => "let-go-hypothetical",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WorryState::ActionNow
                | WorryState::ScheduleLater
                | WorryState::LetGo
                | WorryState::LetGoHypothetical
        )
    }

    /// Terminal outcomes where the user commits to doing something about the worry.
    pub fn takes_action(&self) -> bool {
        matches!(self, WorryState::ActionNow | WorryState::ScheduleLater)
    }

    /// Labels for the options offered at this node, indexed by option number.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            WorryState::Start => &["Submit worry"],
            WorryState::IsReal => &["Real / likely", "Hypothetical"],
            WorryState::CanControl => &["Yes, I can act", "No, it's uncontrollable"],
            WorryState::CanActNow => &["Act now", "Must wait"],
            _ => &[],
        }
    }

    /// Question shown at a decision node.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            WorryState::Start => Some("What are you worried about?"),
            WorryState::IsReal => Some("Is this a real problem or a hypothetical \"what if\"?"),
            WorryState::CanControl => Some("Can you do something about it?"),
            WorryState::CanActNow => Some("Can you do something about it right now?"),
            _ => None,
        }
    }
}

impl fmt::Display for WorryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Next node for `option` chosen at `from`.
///
/// `Start` has the single option 0 (submit the worry); every other decision
/// node is binary. Terminal nodes have no options.
pub fn choose(from: WorryState, option: usize) -> Result<WorryState, WalkError> {
    let next = match (from, option) {
        (WorryState::Start, 0) => WorryState::IsReal,
        (WorryState::IsReal, 0) => WorryState::CanControl,
        (WorryState::IsReal, 1) => WorryState::LetGoHypothetical,
        (WorryState::CanControl, 0) => WorryState::CanActNow,
        (WorryState::CanControl, 1) => WorryState::LetGo,
        (WorryState::CanActNow, 0) => WorryState::ActionNow,
        (WorryState::CanActNow, 1) => WorryState::ScheduleLater,
        _ => return Err(WalkError::InvalidTransition { from, option }),
    };
    Ok(next)
}

/// Undo the last forward step recorded in `history`.
pub fn back(history: &mut Vec<WorryState>) -> Result<WorryState, WalkError> {
    history.pop().ok_or(WalkError::NoHistory)
}
