//! Progress summaries for the dashboard and statistics views.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::{Category, Task};
use crate::enums::Priority;

/// Label used for tasks without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Headline counts for a task collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
    /// Percentage in `0.0..=100.0`; zero for an empty collection.
    pub completion_rate: f64,
    /// Sum of every task's stored elapsed seconds.
    pub tracked_seconds: u64,
}

impl TaskStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_tasks(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        let overdue = tasks.iter().filter(|t| t.is_overdue(now)).count();
        let tracked_seconds = tasks.iter().map(Task::elapsed_seconds).sum();
        let completion_rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64 * 100.0
        };

        Self {
            total,
            completed,
            pending: total - completed,
            overdue,
            completion_rate,
            tracked_seconds,
        }
    }
}

/// Task counts per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityBreakdown {
    #[must_use]
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut acc, task| {
            match task.priority {
                Priority::High => acc.high += 1,
                Priority::Medium => acc.medium += 1,
                Priority::Low => acc.low += 1,
            }
            acc
        })
    }

    #[must_use]
    pub const fn count(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

/// Number of tasks filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// `None` for the uncategorized bucket.
    pub category_id: Option<String>,
    pub name: String,
    pub task_count: usize,
}

/// One entry per category in category order, then an uncategorized bucket
/// when any task lacks a category. Tasks pointing at a deleted category are
/// not counted anywhere.
#[must_use]
pub fn category_breakdown(tasks: &[Task], categories: &[Category]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = categories
        .iter()
        .map(|category| CategoryCount {
            category_id: Some(category.id.clone()),
            name: category.name.clone(),
            task_count: tasks.iter().filter(|t| t.is_in_category(&category.id)).count(),
        })
        .collect();

    let uncategorized = tasks.iter().filter(|t| t.category_id.is_none()).count();
    if uncategorized > 0 {
        counts.push(CategoryCount {
            category_id: None,
            name: UNCATEGORIZED.to_string(),
            task_count: uncategorized,
        });
    }
    counts
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::NewTask;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn task(id: &str) -> Task {
        NewTask::titled(id).into_task(id.into(), now() - Duration::days(7))
    }

    #[test]
    fn empty_collection_has_zero_rate() {
        let stats = TaskStats::from_tasks(&[], now());
        assert_eq!(stats.total, 0);
        assert!(stats.completion_rate.abs() < f64::EPSILON);
    }

    #[test]
    fn counts_completed_pending_and_overdue() {
        let mut a = task("a");
        a.completed = true;
        a.elapsed_time = Some(120);
        let mut b = task("b");
        b.due_date = Some(now() - Duration::days(1));
        b.elapsed_time = Some(30);
        let mut c = task("c");
        c.due_date = Some(now() + Duration::days(1));
        let mut d = task("d");
        d.completed = true;
        d.due_date = Some(now() - Duration::days(3));

        let stats = TaskStats::from_tasks(&[a, b, c, d], now());
        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.overdue, 1);
        assert!((stats.completion_rate - 50.0).abs() < f64::EPSILON);
        assert_eq!(stats.tracked_seconds, 150);
    }

    #[test]
    fn priority_breakdown_counts_each_level() {
        let mut a = task("a");
        a.priority = Priority::High;
        let b = task("b");
        let mut c = task("c");
        c.priority = Priority::Low;
        let mut d = task("d");
        d.priority = Priority::High;

        let breakdown = PriorityBreakdown::from_tasks(&[a, b, c, d]);
        assert_eq!(
            breakdown,
            PriorityBreakdown {
                high: 2,
                medium: 1,
                low: 1
            }
        );
        assert_eq!(breakdown.count(Priority::High), 2);
    }

    #[test]
    fn category_breakdown_skips_dangling_references() {
        let categories = vec![
            Category {
                id: "home".into(),
                name: "Home".into(),
            },
            Category {
                id: "work".into(),
                name: "Work".into(),
            },
        ];
        let mut a = task("a");
        a.category_id = Some("work".into());
        let mut b = task("b");
        b.category_id = Some("gone".into());
        let c = task("c");

        let counts = category_breakdown(&[a, b, c], &categories);
        assert_eq!(
            counts,
            vec![
                CategoryCount {
                    category_id: Some("home".into()),
                    name: "Home".into(),
                    task_count: 0,
                },
                CategoryCount {
                    category_id: Some("work".into()),
                    name: "Work".into(),
                    task_count: 1,
                },
                CategoryCount {
                    category_id: None,
                    name: UNCATEGORIZED.into(),
                    task_count: 1,
                },
            ]
        );
    }

    #[test]
    fn no_uncategorized_bucket_when_every_task_has_a_category() {
        let mut a = task("a");
        a.category_id = Some("x".into());
        let counts = category_breakdown(&[a], &[]);
        assert!(counts.is_empty());
    }
}
