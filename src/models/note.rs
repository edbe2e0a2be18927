use chrono::Local;
use serde::{Deserialize, Serialize};

/// Free-text memo. Notes have no relationship to timesheet entries and an
/// independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    /// RFC 3339 timestamp; refreshed when the note is edited.
    pub created_at: String,
}

impl Note {
    pub fn new(id: u64, title: Option<String>, content: String) -> Self {
        Self {
            id,
            title,
            content,
            created_at: Local::now().to_rfc3339(),
        }
    }
}
