use chrono::{DateTime, SecondsFormat, Utc};

use super::errors::TodoError;
use super::value_objects::{TodoId, TodoPatch, normalize_title};

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(id: TodoId, title: &str) -> Result<Self, TodoError> {
        Ok(Self {
            id,
            title: normalize_title(title)?,
            completed: false,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: TodoId,
        title: String,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            completed,
            created_at,
        }
    }

    /// Merges the fields present in `patch`. Identity and creation time never change.
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(title) = patch.title() {
            self.title = title.to_string();
        }
        if let Some(completed) = patch.completed() {
            self.completed = completed;
        }
    }

    /// Creation time as ISO-8601 with millisecond precision, e.g. `2026-01-01T12:00:00.000Z`.
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
