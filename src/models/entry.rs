use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EntryError;
use crate::utils::time::parse_datetime;

/// Classification tag carried by every reflection entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntryKind {
    Halt,
    WorryTree,
    Journal,
    Other(String),
}

impl EntryKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::Halt => "halt",
            EntryKind::WorryTree => "worry_tree",
            EntryKind::Journal => "journal",
            EntryKind::Other(tag) => tag,
        }
    }
}

impl From<String> for EntryKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "halt" => EntryKind::Halt,
            "worry_tree" => EntryKind::WorryTree,
            "journal" => EntryKind::Journal,
            _ => EntryKind::Other(tag),
        }
    }
}

impl From<EntryKind> for String {
    fn from(kind: EntryKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One prompt and the user's free-text response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A stored guided-reflection record, as loaded by the journal collaborator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReflectionEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub responses: Vec<QaPair>,
}

impl ReflectionEntry {
    pub fn new(
        id: impl Into<String>,
        timestamp: DateTime<Utc>,
        kind: EntryKind,
        responses: Vec<QaPair>,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            kind,
            responses,
        }
    }
}

/// Entry shape as it sits in storage. Required keys are enforced by serde;
/// field contents are checked by `ReflectionEntry::try_from`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub id: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub responses: Vec<QaPair>,
}

impl TryFrom<RawEntry> for ReflectionEntry {
    type Error = EntryError;

    fn try_from(raw: RawEntry) -> Result<Self, Self::Error> {
        let id = raw.id.trim().to_string();
        if id.is_empty() {
            return Err(EntryError::EmptyField("id"));
        }
        if raw.kind.trim().is_empty() {
            return Err(EntryError::EmptyField("type"));
        }

        let timestamp =
            parse_datetime(&raw.timestamp, "timestamp").map_err(|err| {
                EntryError::InvalidTimestamp {
                    id: id.clone(),
                    value: raw.timestamp.clone(),
                    reason: format!("{err:#}"),
                }
            })?;

        if let Some(index) = raw
            .responses
            .iter()
            .position(|pair| pair.question.trim().is_empty())
        {
            return Err(EntryError::EmptyQuestion { id, index });
        }

        Ok(Self {
            id,
            timestamp,
            kind: EntryKind::from(raw.kind.trim().to_string()),
            responses: raw.responses,
        })
    }
}

/// Parse a JSON array of stored entries, rejecting the whole batch on the first bad record.
pub fn parse_entries(json: &str) -> Result<Vec<ReflectionEntry>, EntryError> {
    let raw: Vec<RawEntry> = serde_json::from_str(json)?;
    raw.into_iter().map(ReflectionEntry::try_from).collect()
}

/// Entries carrying the given classification tag, in their original order.
pub fn filter_kind<'a>(
    entries: &'a [ReflectionEntry],
    kind: &EntryKind,
) -> Vec<&'a ReflectionEntry> {
    entries.iter().filter(|entry| &entry.kind == kind).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_halt_entry() {
        let json = r#"[{
            "id": "a1",
            "timestamp": "2026-03-01T08:00:00Z",
            "type": "halt",
            "responses": [{"question": "Are you hungry?", "answer": "No"}]
        }]"#;

        let entries = parse_entries(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, EntryKind::Halt);
        assert_eq!(entries[0].responses[0].answer, "No");
    }

    #[test]
    fn unknown_tag_is_preserved() {
        let json = r#"[{"id": "g", "timestamp": "2026-03-01T08:00:00Z", "type": "grounding"}]"#;
        let entries = parse_entries(json).unwrap();
        assert_eq!(entries[0].kind, EntryKind::Other("grounding".into()));
        assert!(entries[0].responses.is_empty());
    }

    #[test]
    fn missing_timestamp_is_rejected() {
        let json = r#"[{"id": "a1", "type": "halt", "responses": []}]"#;
        assert!(matches!(parse_entries(json), Err(EntryError::Json(_))));
    }

    #[test]
    fn bad_timestamp_is_rejected() {
        let raw = RawEntry {
            id: "a1".into(),
            timestamp: "last tuesday".into(),
            kind: "halt".into(),
            responses: Vec::new(),
        };
        match ReflectionEntry::try_from(raw) {
            Err(EntryError::InvalidTimestamp { id, value, .. }) => {
                assert_eq!(id, "a1");
                assert_eq!(value, "last tuesday");
            }
            other => panic!("expected InvalidTimestamp, got {other:?}"),
        }
    }

    #[test]
    fn blank_question_is_rejected() {
        let raw = RawEntry {
            id: "a1".into(),
            timestamp: "2026-03-01T08:00:00Z".into(),
            kind: "halt".into(),
            responses: vec![QaPair::new("Are you tired?", "yes"), QaPair::new("  ", "hm")],
        };
        assert!(matches!(
            ReflectionEntry::try_from(raw),
            Err(EntryError::EmptyQuestion { index: 1, .. })
        ));
    }

    #[test]
    fn blank_id_and_tag_are_rejected() {
        let raw = RawEntry {
            id: " ".into(),
            timestamp: "2026-03-01T08:00:00Z".into(),
            kind: "halt".into(),
            responses: Vec::new(),
        };
        assert!(matches!(
            ReflectionEntry::try_from(raw),
            Err(EntryError::EmptyField("id"))
        ));

        let raw = RawEntry {
            id: "a1".into(),
            timestamp: "2026-03-01T08:00:00Z".into(),
            kind: "".into(),
            responses: Vec::new(),
        };
        assert!(matches!(
            ReflectionEntry::try_from(raw),
            Err(EntryError::EmptyField("type"))
        ));
    }

    #[test]
    fn filter_keeps_order() {
        let ts = DateTime::parse_from_rfc3339("2026-03-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let entries = vec![
            ReflectionEntry::new("1", ts, EntryKind::Halt, Vec::new()),
            ReflectionEntry::new("2", ts, EntryKind::Journal, Vec::new()),
            ReflectionEntry::new("3", ts, EntryKind::Halt, Vec::new()),
        ];
        let ids: Vec<_> = filter_kind(&entries, &EntryKind::Halt)
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }
}
