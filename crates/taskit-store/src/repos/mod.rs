//! Repositories mirroring each persisted collection in memory.
//!
//! Every mutation updates the in-memory collection first and then writes
//! the whole collection back synchronously. A failed write is logged and
//! the in-memory state stays authoritative until the next write succeeds.

pub mod category;
pub mod task;
