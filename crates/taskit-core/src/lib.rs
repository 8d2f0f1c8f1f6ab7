//! # taskit-core
//!
//! Core types, ID generation, and error types for Taskit.
//!
//! This crate provides the foundational types shared across all Taskit crates:
//! - Entity structs for tasks and categories, plus their creation inputs
//! - Priority and list-filter enums
//! - ID generation
//! - Presentation-layer validation helpers
//! - Elapsed-time formatting
//! - Dashboard statistics and list queries
//! - Cross-cutting error types

pub mod duration;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod query;
pub mod stats;
pub mod validation;
