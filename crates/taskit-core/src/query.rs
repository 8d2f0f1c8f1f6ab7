//! Task list filtering.

use crate::entities::Task;
use crate::enums::{Priority, StatusFilter};

/// Criteria for the task list. Present criteria are AND-ed together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    /// Case-insensitive substring matched against title or description.
    pub search: Option<String>,
    pub status: StatusFilter,
    pub category_id: Option<String>,
    pub priority: Option<Priority>,
}

impl TaskQuery {
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !self.status.accepts(task.completed) {
            return false;
        }
        if let Some(category_id) = &self.category_id {
            if !task.is_in_category(category_id) {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                task.title.to_lowercase().contains(&needle)
                    || task.description.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }

    /// Keep matching tasks, preserving their order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|task| self.matches(task)).collect()
    }
}
