use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recurring self-care habit the user tracks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
