//! # taskit-store
//!
//! Local persistence and live state for Taskit.
//!
//! Tasks and categories are kept as two JSON arrays under the keys `tasks`
//! and `categories` of a [`PersistentStore`](store::PersistentStore). The
//! repositories mirror each array in memory and write it back after every
//! mutation. The [`TimeTracker`](tracker::TimeTracker) runs a single
//! stopwatch against one task at a time, and
//! [`TodoService`](service::TodoService) ties them together.

pub mod error;
pub mod helpers;
pub mod notify;
pub mod repos;
pub mod service;
pub mod store;
pub mod tracker;
pub mod updates;

mod test_support;
