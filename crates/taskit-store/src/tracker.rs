//! Elapsed-time tracker.
//!
//! One stopwatch per process, bound to at most one task. While it runs, one
//! tick loop is scheduled on the Tokio runtime:
//!
//! - every tick adds the tick period to the live count and publishes a
//!   [`TrackerSnapshot`] to subscribers;
//! - every Nth tick (auto-save period over tick period) then writes the live
//!   count into the task's `elapsedTime`.
//!
//! ```text
//! Idle ──start──▶ Running ──pause──▶ Paused
//!   ▲               │  ▲                │
//!   │               │  └─────start──────┘
//!   └──reset/done───┴───────────────────┘
//! ```
//!
//! All session state sits behind one mutex, so the at-most-one-running
//! invariant holds from any thread. Lock order is session, then tasks.
//! Switching to another task while running writes the previous task's live
//! count first.
//!
//! Without a runtime nothing is scheduled; the host calls [`TimeTracker::tick`]
//! and [`TimeTracker::autosave`] from its own loop.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use taskit_config::TrackerConfig;
use taskit_core::duration::{format_clock, format_human};
use taskit_core::entities::Task;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::{Instant, interval_at};

use crate::notify::{Notification, Notifier};
use crate::repos::task::{SharedTaskRepository, TaskRepository, lock_shared};
use crate::updates::task::TaskUpdateBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerState {
    Idle,
    Running,
    /// Stopped, but still showing the last count of the bound task.
    Paused,
}

/// What an observer sees of the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerSnapshot {
    pub state: TrackerState,
    pub task_id: Option<String>,
    pub elapsed_seconds: u64,
    pub started_at: Option<DateTime<Utc>>,
}

impl TrackerSnapshot {
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            state: TrackerState::Idle,
            task_id: None,
            elapsed_seconds: 0,
            started_at: None,
        }
    }

    #[must_use]
    pub fn is_running_for(&self, task_id: &str) -> bool {
        self.state == TrackerState::Running && self.task_id.as_deref() == Some(task_id)
    }

    /// The live count as `HH:MM:SS`.
    #[must_use]
    pub fn clock(&self) -> String {
        format_clock(self.elapsed_seconds)
    }
}

struct Session {
    state: TrackerState,
    task_id: Option<String>,
    elapsed_seconds: u64,
    started_at: Option<DateTime<Utc>>,
    /// Bumped whenever ticks are cancelled; loops from older generations exit.
    generation: u64,
    ticks: Option<AbortHandle>,
}

impl Session {
    const fn new() -> Self {
        Self {
            state: TrackerState::Idle,
            task_id: None,
            elapsed_seconds: 0,
            started_at: None,
            generation: 0,
            ticks: None,
        }
    }

    fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            state: self.state,
            task_id: self.task_id.clone(),
            elapsed_seconds: self.elapsed_seconds,
            started_at: self.started_at,
        }
    }

    fn is_bound_to(&self, task_id: &str) -> bool {
        self.task_id.as_deref() == Some(task_id)
    }

    fn running_task(&self) -> Option<&str> {
        match self.state {
            TrackerState::Running => self.task_id.as_deref(),
            TrackerState::Idle | TrackerState::Paused => None,
        }
    }

    fn cancel_ticks(&mut self) {
        if let Some(handle) = self.ticks.take() {
            handle.abort();
        }
        self.generation = self.generation.wrapping_add(1);
    }

    fn clear(&mut self) {
        self.state = TrackerState::Idle;
        self.task_id = None;
        self.elapsed_seconds = 0;
        self.started_at = None;
    }
}

struct Inner {
    session: Mutex<Session>,
    tasks: SharedTaskRepository,
    notifier: Arc<dyn Notifier>,
    snapshots: watch::Sender<TrackerSnapshot>,
    display_period: Duration,
    autosave_period: Duration,
}

impl Inner {
    fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_tasks(&self) -> MutexGuard<'_, TaskRepository> {
        lock_shared(&self.tasks)
    }

    fn publish(&self, session: &Session) {
        self.snapshots.send_replace(session.snapshot());
    }

    fn write_elapsed(&self, task_id: &str, seconds: u64) {
        let update = TaskUpdateBuilder::new().elapsed_time(Some(seconds)).build();
        if self.lock_tasks().update(task_id, &update).is_none() {
            tracing::warn!(task_id, seconds, "tracked task no longer exists; elapsed time dropped");
        }
    }

    /// Display tick. `None` accepts any generation (host-driven ticks).
    fn advance(&self, generation: Option<u64>) -> bool {
        let mut session = self.lock_session();
        if generation.is_some_and(|g| g != session.generation)
            || session.state != TrackerState::Running
        {
            return false;
        }
        session.elapsed_seconds += self.display_period.as_secs();
        self.publish(&session);
        true
    }

    /// Auto-save tick. `None` accepts any generation (host-driven ticks).
    fn save_live(&self, generation: Option<u64>) -> bool {
        let session = self.lock_session();
        if generation.is_some_and(|g| g != session.generation) {
            return false;
        }
        let Some(task_id) = session.running_task() else {
            return false;
        };
        tracing::trace!(task_id, seconds = session.elapsed_seconds, "auto-saving elapsed time");
        self.write_elapsed(task_id, session.elapsed_seconds);
        true
    }

    /// Cancel ticks and keep a running count, without notifying anyone.
    fn halt(&self) {
        let mut session = self.lock_session();
        session.cancel_ticks();
        if let Some(task_id) = session.running_task().map(String::from) {
            self.write_elapsed(&task_id, session.elapsed_seconds);
            session.state = TrackerState::Paused;
            session.started_at = None;
            self.publish(&session);
        }
    }
}

/// Display ticks between two auto-saves, never less than one.
fn ticks_per_save(display: Duration, autosave: Duration) -> u64 {
    let display = display.as_secs().max(1);
    (autosave.as_secs() / display).max(1)
}

/// Spawn the tick loop for `generation`, if a runtime is available.
///
/// One interval drives both actions, so every auto-save writes the count
/// that already includes the tick it lands on.
fn spawn_ticks(inner: &Arc<Inner>, generation: u64) -> Option<AbortHandle> {
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        tracing::debug!("no async runtime; tracker ticks are host-driven");
        return None;
    };

    let inner = Arc::clone(inner);
    let period = inner.display_period;
    let save_every = ticks_per_save(inner.display_period, inner.autosave_period);
    let handle = runtime.spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        let mut ticks: u64 = 0;
        loop {
            interval.tick().await;
            if !inner.advance(Some(generation)) {
                break;
            }
            ticks += 1;
            if ticks % save_every == 0 && !inner.save_live(Some(generation)) {
                break;
            }
        }
    });
    Some(handle.abort_handle())
}

/// The process-wide stopwatch. Hand out references; do not construct two.
pub struct TimeTracker {
    inner: Arc<Inner>,
}

impl TimeTracker {
    #[must_use]
    pub fn new(
        tasks: SharedTaskRepository,
        notifier: Arc<dyn Notifier>,
        config: &TrackerConfig,
    ) -> Self {
        let (snapshots, _) = watch::channel(TrackerSnapshot::idle());
        Self {
            inner: Arc::new(Inner {
                session: Mutex::new(Session::new()),
                tasks,
                notifier,
                snapshots,
                display_period: config.display_period(),
                autosave_period: config.autosave_period(),
            }),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> TrackerSnapshot {
        self.inner.lock_session().snapshot()
    }

    /// Receive a snapshot after every tick and transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TrackerSnapshot> {
        self.inner.snapshots.subscribe()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.inner.lock_session().state == TrackerState::Running
    }

    /// Start counting from `initial_seconds` for `task_id`.
    ///
    /// Returns `None` (and logs) if the task does not exist. A different task
    /// that is already running has its live count written before the switch.
    pub fn start_timer(&self, task_id: &str, initial_seconds: u64) -> Option<TrackerSnapshot> {
        let inner = &self.inner;
        let mut session = inner.lock_session();

        let Some(title) = inner.lock_tasks().get(task_id).map(|t| t.title.clone()) else {
            tracing::error!(task_id, "cannot start timer: task not found");
            return None;
        };

        if let Some(previous) = session.running_task().map(String::from) {
            tracing::debug!(from = %previous, to = task_id, "switching timer");
            inner.write_elapsed(&previous, session.elapsed_seconds);
        }
        session.cancel_ticks();

        session.state = TrackerState::Running;
        session.task_id = Some(task_id.to_string());
        session.elapsed_seconds = initial_seconds;
        session.started_at = Some(Utc::now());
        session.ticks = spawn_ticks(inner, session.generation);
        inner.publish(&session);
        let snapshot = session.snapshot();
        drop(session);

        tracing::info!(task_id, initial_seconds, "timer started");
        inner.notifier.notify(Notification::info(
            "Timer started",
            format!("Tracking time for \"{title}\""),
        ));
        Some(snapshot)
    }

    /// Start counting from whatever the task has accumulated so far.
    pub fn resume_timer(&self, task_id: &str) -> Option<TrackerSnapshot> {
        let seconds = self.realtime_elapsed(task_id);
        self.start_timer(task_id, seconds)
    }

    /// Stop counting and write the live count into the task.
    ///
    /// Returns `None` if nothing was running. The count and task stay visible
    /// in the `Paused` snapshot.
    pub fn pause_timer(&self) -> Option<TrackerSnapshot> {
        let inner = &self.inner;
        let mut session = inner.lock_session();
        let task_id = session.running_task()?.to_string();

        session.cancel_ticks();
        let seconds = session.elapsed_seconds;
        inner.write_elapsed(&task_id, seconds);
        session.state = TrackerState::Paused;
        session.started_at = None;
        inner.publish(&session);
        let snapshot = session.snapshot();
        drop(session);

        tracing::info!(task_id = %task_id, seconds, "timer paused");
        inner.notifier.notify(Notification::info(
            "Timer paused",
            format!("Recorded {} ({})", format_human(seconds), format_clock(seconds)),
        ));
        Some(snapshot)
    }

    /// Zero the bound task's elapsed time and unbind.
    pub fn reset_timer(&self) -> TrackerSnapshot {
        let inner = &self.inner;
        let mut session = inner.lock_session();
        session.cancel_ticks();
        if let Some(task_id) = session.task_id.take() {
            inner.write_elapsed(&task_id, 0);
            tracing::info!(task_id = %task_id, "timer reset");
        }
        session.clear();
        inner.publish(&session);
        let snapshot = session.snapshot();
        drop(session);

        inner.notifier.notify(Notification::info(
            "Timer reset",
            "Elapsed time cleared",
        ));
        snapshot
    }

    /// Mark the task completed with its final elapsed time.
    ///
    /// The final count is the live one if this task is running, otherwise
    /// what is stored. Ticks for another running task are left alone.
    /// Returns `None` if the task does not exist.
    pub fn stop_and_mark_completed(&self, task_id: &str) -> Option<Task> {
        let inner = &self.inner;
        let mut session = inner.lock_session();
        let bound = session.is_bound_to(task_id);
        let live = session.running_task() == Some(task_id);

        let mut tasks = inner.lock_tasks();
        let Some(stored) = tasks.get(task_id) else {
            drop(tasks);
            tracing::error!(task_id, "cannot complete: task not found");
            if bound {
                session.cancel_ticks();
                session.clear();
                inner.publish(&session);
            }
            return None;
        };
        let title = stored.title.clone();
        let final_seconds = if live {
            session.elapsed_seconds
        } else {
            stored.elapsed_seconds()
        };

        let update = TaskUpdateBuilder::new()
            .elapsed_time(Some(final_seconds))
            .completed(true)
            .build();
        let completed = tasks.update(task_id, &update);
        drop(tasks);

        if bound {
            session.cancel_ticks();
            session.clear();
            inner.publish(&session);
        }
        drop(session);

        tracing::info!(task_id, final_seconds, "task completed from tracker");
        inner.notifier.notify(Notification::info(
            "Task completed",
            format!("\"{title}\" finished in {}", format_human(final_seconds)),
        ));
        completed
    }

    /// Live count if `task_id` is running, otherwise its stored elapsed time.
    #[must_use]
    pub fn realtime_elapsed(&self, task_id: &str) -> u64 {
        let session = self.inner.lock_session();
        if session.running_task() == Some(task_id) {
            return session.elapsed_seconds;
        }
        self.inner
            .lock_tasks()
            .get(task_id)
            .map_or(0, Task::elapsed_seconds)
    }

    /// Run one display tick now. Returns false if nothing is running.
    pub fn tick(&self) -> bool {
        self.inner.advance(None)
    }

    /// Run one auto-save now. Returns false if nothing is running.
    pub fn autosave(&self) -> bool {
        self.inner.save_live(None)
    }

    /// Unbind from `task_id` without writing anything, e.g. after it was deleted.
    pub fn release(&self, task_id: &str) -> bool {
        let mut session = self.inner.lock_session();
        if !session.is_bound_to(task_id) {
            return false;
        }
        session.cancel_ticks();
        session.clear();
        self.inner.publish(&session);
        true
    }
}

impl Drop for TimeTracker {
    fn drop(&mut self) {
        self.inner.halt();
    }
}
