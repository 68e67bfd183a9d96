use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::QaPair;

/// The four basic needs of the HALT check-in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Need {
    Hunger,
    Anger,
    Loneliness,
    Tiredness,
}

impl Need {
    /// HALT order. Also the tie-break order when comparing needs.
    pub const ALL: [Need; 4] = [Need::Hunger, Need::Anger, Need::Loneliness, Need::Tiredness];

    pub fn as_str(&self) -> &'static str {
        match self {
            Need::Hunger => "hungry",
            Need::Anger => "angry",
            Need::Loneliness => "lonely",
            Need::Tiredness => "tired",
        }
    }

    fn rule(&self) -> &'static NeedRule {
        match self {
            Need::Hunger => &RULES[0],
            Need::Anger => &RULES[1],
            Need::Loneliness => &RULES[2],
            Need::Tiredness => &RULES[3],
        }
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct NeedRule {
    need: Need,
    question_keywords: &'static [&'static str],
    concern_keywords: &'static [&'static str],
    /// Answers longer than this many characters count as a concern regardless of wording.
    long_answer_chars: Option<usize>,
}

// Checked in HALT order; the first rule whose question keywords match owns the pair.
const RULES: [NeedRule; 4] = [
    NeedRule {
        need: Need::Hunger,
        question_keywords: &["hungry", "physical"],
        concern_keywords: &["not", "haven't", "skip", "low"],
        long_answer_chars: None,
    },
    NeedRule {
        need: Need::Anger,
        question_keywords: &["angry", "frustrat"],
        concern_keywords: &["yes", "frustrat", "annoyed", "upset"],
        // TODO: long calm answers also trip this; needs product review before changing.
        long_answer_chars: Some(50),
    },
    NeedRule {
        need: Need::Loneliness,
        question_keywords: &["lonely", "connection"],
        concern_keywords: &["yes", "lonely", "alone", "isolated", "disconnected", "miss"],
        long_answer_chars: None,
    },
    NeedRule {
        need: Need::Tiredness,
        question_keywords: &["tired", "sleep", "rest"],
        concern_keywords: &["yes", "tired", "exhausted", "not", "poor", "bad", "little"],
        long_answer_chars: None,
    },
];

/// Which need, if any, the question asks about.
pub fn question_need(question: &str) -> Option<Need> {
    let question = question.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.question_keywords.iter().any(|k| question.contains(k)))
        .map(|rule| rule.need)
}

/// Whether `answer` signals an unmet `need`.
pub fn answer_signals_concern(need: Need, answer: &str) -> bool {
    let rule = need.rule();
    let answer = answer.to_lowercase();

    rule.concern_keywords.iter().any(|k| answer.contains(k))
        || rule
            .long_answer_chars
            .is_some_and(|limit| answer.chars().count() > limit)
}

/// The need this pair reports as unmet. At most one per pair.
pub fn classify(pair: &QaPair) -> Option<Need> {
    let need = question_need(&pair.question)?;
    answer_signals_concern(need, &pair.answer).then_some(need)
}
