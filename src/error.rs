//! Error types for the worry walker and the reflection entry boundary.

use thiserror::Error;

use crate::worry::WorryState;

/// Caller errors raised by the worry decision tree. None of them mutate the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalkError {
    #[error("no option {option} from {from}")]
    InvalidTransition { from: WorryState, option: usize },

    #[error("already at the start of the decision tree")]
    NoHistory,

    #[error("decision tree is not finished (at {0})")]
    NotFinished(WorryState),

    #[error("worry text is empty")]
    EmptyWorry,

    #[error("anxiety rating {0} is outside 0-10")]
    RatingOutOfRange(u8),

    #[error("anxiety level after the exercise has not been recorded")]
    MissingAfterRating,
}

/// A reflection entry that failed validation at the deserialization boundary.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("entry field `{0}` is empty")]
    EmptyField(&'static str),

    #[error("entry {id} has an invalid timestamp `{value}`: {reason}")]
    InvalidTimestamp {
        id: String,
        value: String,
        reason: String,
    },

    #[error("entry {id} has a response with an empty question (index {index})")]
    EmptyQuestion { id: String, index: usize },

    #[error("malformed entry JSON: {0}")]
    Json(#[from] serde_json::Error),
}
