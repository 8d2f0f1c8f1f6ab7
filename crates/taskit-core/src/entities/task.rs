use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Priority;

/// A user-defined unit of work.
///
/// Stored records use camelCase field names. `dueDate` is always written
/// (as `null` when unset); the other optionals are omitted when absent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    /// Date-only semantics; the time component carries no meaning.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    /// Weak reference to a [`Category`](super::Category). May dangle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Free-text estimate in whatever unit the user typed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    /// Seconds accumulated by the time tracker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<u64>,
}

impl Task {
    /// Stored elapsed seconds, treating an absent value as zero.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_time.unwrap_or(0)
    }

    /// Whether the task is still open and its due date lies before `now`.
    #[must_use]
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < now)
    }

    /// Whether the task belongs to the given category.
    #[must_use]
    pub fn is_in_category(&self, category_id: &str) -> bool {
        self.category_id.as_deref() == Some(category_id)
    }
}

/// Caller-supplied fields for a new task.
///
/// Everything but the title is optional; defaults are applied when the task
/// is constructed (empty description, medium priority, no due date).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<DateTime<Utc>>,
    pub category_id: Option<String>,
    pub estimated_time: Option<String>,
    pub elapsed_time: Option<u64>,
}

impl NewTask {
    /// A new task with only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Build the stored entity. `completed` starts false and `updatedAt` unset.
    #[must_use]
    pub fn into_task(self, id: String, created_at: DateTime<Utc>) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description.unwrap_or_default(),
            completed: false,
            priority: self.priority.unwrap_or_default(),
            due_date: self.due_date,
            category_id: self.category_id,
            created_at,
            updated_at: None,
            estimated_time: self.estimated_time,
            elapsed_time: self.elapsed_time,
        }
    }
}
