//! Task update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;
use taskit_core::entities::Task;
use taskit_core::enums::Priority;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<DateTime<Utc>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_time: Option<Option<u64>>,
}

impl TaskUpdate {
    /// Whether the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Assign every present field onto `task`.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            task.description.clone_from(description);
        }
        if let Some(completed) = self.completed {
            task.completed = completed;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(category_id) = &self.category_id {
            task.category_id.clone_from(category_id);
        }
        if let Some(estimated_time) = &self.estimated_time {
            task.estimated_time.clone_from(estimated_time);
        }
        if let Some(elapsed_time) = self.elapsed_time {
            task.elapsed_time = elapsed_time;
        }
    }
}

pub struct TaskUpdateBuilder(TaskUpdate);

impl TaskUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(TaskUpdate::default())
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.0.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.0.completed = Some(completed);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.0.due_date = Some(due_date);
        self
    }

    #[must_use]
    pub fn category_id(mut self, category_id: Option<String>) -> Self {
        self.0.category_id = Some(category_id);
        self
    }

    #[must_use]
    pub fn estimated_time(mut self, estimated_time: Option<String>) -> Self {
        self.0.estimated_time = Some(estimated_time);
        self
    }

    #[must_use]
    pub fn elapsed_time(mut self, elapsed_time: Option<u64>) -> Self {
        self.0.elapsed_time = Some(elapsed_time);
        self
    }

    #[must_use]
    pub fn build(self) -> TaskUpdate {
        self.0
    }
}

impl Default for TaskUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use taskit_core::entities::NewTask;

    use super::*;

    fn task() -> Task {
        NewTask {
            title: "Original".into(),
            description: Some("keep me".into()),
            category_id: Some("c1".into()),
            estimated_time: Some("1h".into()),
            ..NewTask::default()
        }
        .into_task("t".into(), Utc::now())
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let update = TaskUpdateBuilder::new().build();
        assert!(update.is_empty());

        let mut t = task();
        let before = t.clone();
        update.apply_to(&mut t);
        assert_eq!(t, before);
    }

    #[test]
    fn only_present_fields_are_assigned() {
        let mut t = task();
        TaskUpdateBuilder::new()
            .title("Renamed")
            .priority(Priority::High)
            .build()
            .apply_to(&mut t);

        assert_eq!(t.title, "Renamed");
        assert_eq!(t.priority, Priority::High);
        assert_eq!(t.description, "keep me");
        assert_eq!(t.category_id.as_deref(), Some("c1"));
    }

    #[test]
    fn nested_none_clears_optional_fields() {
        let mut t = task();
        TaskUpdateBuilder::new()
            .category_id(None)
            .estimated_time(None)
            .elapsed_time(Some(17))
            .build()
            .apply_to(&mut t);

        assert_eq!(t.category_id, None);
        assert_eq!(t.estimated_time, None);
        assert_eq!(t.elapsed_time, Some(17));
    }

    #[test]
    fn serializes_changed_fields_only() {
        let update = TaskUpdateBuilder::new().completed(true).build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "completed": true }));
    }
}
