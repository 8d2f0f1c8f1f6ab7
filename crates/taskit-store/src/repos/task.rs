//! Task repository: in-memory collection with write-through to the `tasks` key.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use taskit_core::entities::{NewTask, Task};
use taskit_core::ids::new_id;
use taskit_core::query::TaskQuery;

use crate::helpers::{load_collection, save_collection};
use crate::store::{PersistentStore, TASKS_KEY};
use crate::updates::task::TaskUpdate;

/// Task repository shared between the service and the tracker's tick loops.
pub type SharedTaskRepository = Arc<Mutex<TaskRepository>>;

/// Lock a shared repository, recovering the guard from a poisoned lock.
pub fn lock_shared(shared: &SharedTaskRepository) -> MutexGuard<'_, TaskRepository> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct TaskRepository {
    store: Arc<dyn PersistentStore>,
    tasks: Vec<Task>,
}

impl TaskRepository {
    /// Load the task collection from `store`. Unreadable content loads empty.
    #[must_use]
    pub fn load(store: Arc<dyn PersistentStore>) -> Self {
        let tasks = load_collection(store.as_ref(), TASKS_KEY);
        Self { store, tasks }
    }

    /// Wrap the repository for sharing with the time tracker.
    #[must_use]
    pub fn into_shared(self) -> SharedTaskRepository {
        Arc::new(Mutex::new(self))
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks matching `query`, in insertion order.
    #[must_use]
    pub fn query(&self, query: &TaskQuery) -> Vec<Task> {
        query.apply(&self.tasks).into_iter().cloned().collect()
    }

    /// Number of tasks filed under `category_id`.
    #[must_use]
    pub fn count_referencing(&self, category_id: &str) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.is_in_category(category_id))
            .count()
    }

    pub fn add(&mut self, new: NewTask) -> Task {
        let task = new.into_task(new_id(), Utc::now());
        tracing::debug!(task_id = %task.id, title = %task.title, "adding task");
        self.tasks.push(task.clone());
        self.persist();
        task
    }

    /// Merge `update` into the task. Returns `None` if no task has this id.
    ///
    /// A non-empty patch also stamps `updatedAt`.
    pub fn update(&mut self, id: &str, update: &TaskUpdate) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        if update.is_empty() {
            return Some(task.clone());
        }

        update.apply_to(task);
        task.updated_at = Some(Utc::now());
        let updated = task.clone();
        tracing::debug!(task_id = %id, ?update, "updated task");
        self.persist();
        Some(updated)
    }

    /// Flip `completed`. Returns `None` if no task has this id.
    pub fn toggle_completion(&mut self, id: &str) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        task.updated_at = Some(Utc::now());
        let toggled = task.clone();
        tracing::debug!(task_id = %id, completed = toggled.completed, "toggled task");
        self.persist();
        Some(toggled)
    }

    /// Remove the task. Returns the removed task, or `None` if absent.
    pub fn delete(&mut self, id: &str) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let removed = self.tasks.remove(index);
        tracing::debug!(task_id = %id, "deleted task");
        self.persist();
        Some(removed)
    }

    fn persist(&self) {
        if let Err(error) = save_collection(self.store.as_ref(), TASKS_KEY, &self.tasks) {
            tracing::error!(%error, count = self.tasks.len(), "failed to persist tasks");
        }
    }
}
