//! Service layer tying the repositories and the time tracker together.
//!
//! `TodoService` owns one task repository (shared with the tracker's tick
//! loops), one category repository, and the process-wide [`TimeTracker`].
//! Operations that touch more than one of them live here: validated creates,
//! the category-deletion gate, task deletion releasing the tracker.

use std::sync::{Arc, MutexGuard};

use chrono::Utc;
use serde::Serialize;
use taskit_config::{TaskitConfig, TrackerConfig};
use taskit_core::entities::{Category, NewCategory, NewTask, Task};
use taskit_core::errors::CoreError;
use taskit_core::stats::{CategoryCount, PriorityBreakdown, TaskStats, category_breakdown};
use taskit_core::validation::{validate_category_name, validate_title};

use crate::error::StoreError;
use crate::notify::{Notification, Notifier, TracingNotifier};
use crate::repos::category::CategoryRepository;
use crate::repos::task::{SharedTaskRepository, TaskRepository, lock_shared};
use crate::store::{FileStore, MemoryStore, PersistentStore};
use crate::tracker::TimeTracker;
use crate::updates::category::CategoryUpdateBuilder;
use crate::updates::task::{TaskUpdate, TaskUpdateBuilder};

/// Outcome of [`TodoService::delete_category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CategoryDeletion {
    Deleted { category: Category },
    /// Refused: tasks still reference the category.
    InUse { task_count: usize },
    NotFound,
}

pub struct TodoService {
    tasks: SharedTaskRepository,
    categories: CategoryRepository,
    tracker: TimeTracker,
    notifier: Arc<dyn Notifier>,
}

impl TodoService {
    /// Build a service over `store`, loading both collections.
    #[must_use]
    pub fn open(
        store: Arc<dyn PersistentStore>,
        notifier: Arc<dyn Notifier>,
        tracker_config: &TrackerConfig,
    ) -> Self {
        let tasks = TaskRepository::load(Arc::clone(&store)).into_shared();
        let categories = CategoryRepository::load(store);
        let tracker = TimeTracker::new(Arc::clone(&tasks), Arc::clone(&notifier), tracker_config);
        Self {
            tasks,
            categories,
            tracker,
            notifier,
        }
    }

    /// Open the file store under the configured data directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DataDir` if the directory cannot be resolved or created.
    pub fn open_local(config: &TaskitConfig, notifier: Arc<dyn Notifier>) -> Result<Self, StoreError> {
        let dir = config
            .storage
            .resolve_data_dir()
            .map_err(|e| StoreError::DataDir(e.to_string()))?;
        let store = FileStore::open(dir)?;
        Ok(Self::open(Arc::new(store), notifier, &config.tracker))
    }

    /// A service over an empty [`MemoryStore`] that logs notifications.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::open(
            Arc::new(MemoryStore::new()),
            Arc::new(TracingNotifier),
            &TrackerConfig::default(),
        )
    }

    /// Lock the task repository. Do not hold the guard across tracker calls.
    pub fn tasks(&self) -> MutexGuard<'_, TaskRepository> {
        lock_shared(&self.tasks)
    }

    #[must_use]
    pub fn shared_tasks(&self) -> SharedTaskRepository {
        Arc::clone(&self.tasks)
    }

    #[must_use]
    pub const fn categories(&self) -> &CategoryRepository {
        &self.categories
    }

    pub const fn categories_mut(&mut self) -> &mut CategoryRepository {
        &mut self.categories
    }

    #[must_use]
    pub const fn tracker(&self) -> &TimeTracker {
        &self.tracker
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// Add a task after trimming and checking its title.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank title.
    pub fn create_task(&self, mut new: NewTask) -> Result<Task, CoreError> {
        new.title = validate_title(&new.title)?;
        let task = self.tasks().add(new);
        self.notifier.notify(Notification::info(
            "Task created",
            format!("\"{}\" was added", task.title),
        ));
        Ok(task)
    }

    /// Apply `update`, checking a new title if one is set.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank title or
    /// `CoreError::NotFound` if the task does not exist.
    pub fn update_task(&self, id: &str, update: &TaskUpdate) -> Result<Task, CoreError> {
        let mut update = update.clone();
        if let Some(title) = update.title.as_deref() {
            update.title = Some(validate_title(title)?);
        }
        self.tasks()
            .update(id, &update)
            .ok_or_else(|| CoreError::task_not_found(id))
    }

    /// Flip completion.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the task does not exist.
    pub fn toggle_task(&self, id: &str) -> Result<Task, CoreError> {
        self.tasks()
            .toggle_completion(id)
            .ok_or_else(|| CoreError::task_not_found(id))
    }

    /// Remove a task, unbinding the tracker first if it was tracking it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the task does not exist.
    pub fn delete_task(&self, id: &str) -> Result<Task, CoreError> {
        if self.tracker.release(id) {
            tracing::debug!(task_id = id, "released tracker from deleted task");
        }
        let removed = self
            .tasks()
            .delete(id)
            .ok_or_else(|| CoreError::task_not_found(id))?;
        self.notifier.notify(Notification::destructive(
            "Task deleted",
            format!("\"{}\" was removed", removed.title),
        ));
        Ok(removed)
    }

    /// Zero a task's elapsed time. Goes through the tracker when it is bound
    /// to this task so the live count is cleared as well.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the task does not exist.
    pub fn reset_elapsed(&self, id: &str) -> Result<Task, CoreError> {
        if self.tracker.snapshot().task_id.as_deref() == Some(id) {
            self.tracker.reset_timer();
            return self
                .tasks()
                .get(id)
                .cloned()
                .ok_or_else(|| CoreError::task_not_found(id));
        }
        let update = TaskUpdateBuilder::new().elapsed_time(Some(0)).build();
        self.tasks()
            .update(id, &update)
            .ok_or_else(|| CoreError::task_not_found(id))
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank name.
    pub fn create_category(&mut self, name: &str) -> Result<Category, CoreError> {
        let name = validate_category_name(name)?;
        Ok(self.categories.add(NewCategory::named(name)))
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank name or
    /// `CoreError::NotFound` if the category does not exist.
    pub fn rename_category(&mut self, id: &str, name: &str) -> Result<Category, CoreError> {
        let name = validate_category_name(name)?;
        let update = CategoryUpdateBuilder::new().name(name).build();
        self.categories
            .update(id, &update)
            .ok_or_else(|| CoreError::category_not_found(id))
    }

    #[must_use]
    pub fn count_tasks_in_category(&self, category_id: &str) -> usize {
        self.tasks().count_referencing(category_id)
    }

    /// Delete a category only if no task references it.
    pub fn delete_category(&mut self, id: &str) -> CategoryDeletion {
        if self.categories.get(id).is_none() {
            return CategoryDeletion::NotFound;
        }

        let task_count = self.count_tasks_in_category(id);
        if task_count > 0 {
            tracing::info!(category_id = id, task_count, "category still in use");
            self.notifier.notify(Notification::destructive(
                "Cannot delete category",
                format!("{task_count} task(s) still use this category"),
            ));
            return CategoryDeletion::InUse { task_count };
        }

        match self.categories.delete(id) {
            Some(category) => {
                self.notifier.notify(Notification::info(
                    "Category deleted",
                    format!("\"{}\" was removed", category.name),
                ));
                CategoryDeletion::Deleted { category }
            }
            None => CategoryDeletion::NotFound,
        }
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn stats(&self) -> TaskStats {
        TaskStats::from_tasks(self.tasks().list(), Utc::now())
    }

    #[must_use]
    pub fn priority_breakdown(&self) -> PriorityBreakdown {
        PriorityBreakdown::from_tasks(self.tasks().list())
    }

    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryCount> {
        category_breakdown(self.tasks().list(), self.categories.list())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use taskit_core::enums::Priority;

    use super::*;
    use crate::notify::{MemoryNotifier, NotificationLevel};
    use crate::test_support::helpers::test_service;

    fn filed_under(category_id: &str) -> NewTask {
        NewTask {
            title: "filed".into(),
            category_id: Some(category_id.into()),
            ..NewTask::default()
        }
    }

    #[test]
    fn create_task_trims_title() {
        let svc = test_service();
        let task = svc.create_task(NewTask::titled("  Buy milk  ")).unwrap();
        assert_eq!(task.title, "Buy milk");
        assert_eq!(svc.tasks().list().len(), 1);
    }

    #[test]
    fn create_task_rejects_blank_title() {
        let svc = test_service();
        let err = svc.create_task(NewTask::titled("   ")).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(svc.tasks().list().is_empty());
    }

    #[test]
    fn update_task_reports_missing() {
        let svc = test_service();
        let update = TaskUpdateBuilder::new().priority(Priority::High).build();
        let err = svc.update_task("missing", &update).unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn category_in_use_is_not_deleted() {
        let mut svc = test_service();
        let work = svc.create_category("Work").unwrap();
        svc.create_category("Home").unwrap();
        svc.create_task(filed_under(&work.id)).unwrap();
        svc.create_task(filed_under(&work.id)).unwrap();
        let before = svc.categories().list().to_vec();

        assert_eq!(
            svc.delete_category(&work.id),
            CategoryDeletion::InUse { task_count: 2 }
        );
        assert_eq!(svc.categories().list(), before.as_slice());
        assert_eq!(before.len(), 2);
    }

    #[test]
    fn unused_category_is_deleted() {
        let mut svc = test_service();
        let home = svc.create_category("Home").unwrap();

        assert_eq!(
            svc.delete_category(&home.id),
            CategoryDeletion::Deleted {
                category: home.clone()
            }
        );
        assert_eq!(svc.delete_category(&home.id), CategoryDeletion::NotFound);
    }

    #[test]
    fn category_frees_up_after_tasks_move() {
        let mut svc = test_service();
        let work = svc.create_category("Work").unwrap();
        let task = svc.create_task(filed_under(&work.id)).unwrap();

        let update = TaskUpdateBuilder::new().category_id(None).build();
        svc.update_task(&task.id, &update).unwrap();
        assert_eq!(svc.count_tasks_in_category(&work.id), 0);
        assert!(matches!(
            svc.delete_category(&work.id),
            CategoryDeletion::Deleted { .. }
        ));
    }

    #[test]
    fn rename_category_validates() {
        let mut svc = test_service();
        let c = svc.create_category("Errands").unwrap();
        assert!(svc.rename_category(&c.id, " ").is_err());
        assert_eq!(svc.rename_category(&c.id, "Chores").unwrap().name, "Chores");
        assert!(svc.rename_category("missing", "x").is_err());
    }

    #[test]
    fn deleting_tracked_task_releases_tracker() {
        let svc = test_service();
        let task = svc.create_task(NewTask::titled("tracked")).unwrap();
        svc.tracker().start_timer(&task.id, 0).unwrap();

        svc.delete_task(&task.id).unwrap();
        assert!(!svc.tracker().is_running());
        assert!(svc.tasks().get(&task.id).is_none());
        assert!(svc.delete_task(&task.id).is_err());
    }

    #[test]
    fn reset_elapsed_with_and_without_tracker() {
        let svc = test_service();
        let idle = svc.create_task(NewTask::titled("idle")).unwrap();
        let live = svc.create_task(NewTask::titled("live")).unwrap();
        svc.update_task(&idle.id, &TaskUpdateBuilder::new().elapsed_time(Some(90)).build())
            .unwrap();

        assert_eq!(svc.reset_elapsed(&idle.id).unwrap().elapsed_time, Some(0));

        svc.tracker().start_timer(&live.id, 30).unwrap();
        assert_eq!(svc.reset_elapsed(&live.id).unwrap().elapsed_time, Some(0));
        assert!(!svc.tracker().is_running());
    }

    #[test]
    fn stats_cover_all_tasks() {
        let mut svc = test_service();
        let work = svc.create_category("Work").unwrap();
        let a = svc.create_task(filed_under(&work.id)).unwrap();
        svc.create_task(NewTask {
            title: "loose".into(),
            priority: Some(Priority::High),
            ..NewTask::default()
        })
        .unwrap();
        svc.toggle_task(&a.id).unwrap();

        let stats = svc.stats();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.completed, 1);
        assert_eq!(svc.priority_breakdown().count(Priority::High), 1);

        let breakdown = svc.category_breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].task_count, 1);
        assert_eq!(breakdown[1].category_id, None);
    }

    #[test]
    fn destructive_actions_notify_as_destructive() {
        let notifier = Arc::new(MemoryNotifier::new());
        let svc = TodoService::open(
            Arc::new(MemoryStore::new()),
            notifier.clone(),
            &TrackerConfig::default(),
        );
        let task = svc.create_task(NewTask::titled("gone")).unwrap();
        svc.delete_task(&task.id).unwrap();

        let levels: Vec<_> = notifier.take().into_iter().map(|n| n.level).collect();
        assert_eq!(
            levels,
            [NotificationLevel::Info, NotificationLevel::Destructive]
        );
    }
}
