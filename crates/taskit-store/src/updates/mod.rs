//! Update builder types for entity mutations.
//!
//! Each builder produces a patch struct with `Option` fields. Only `Some`
//! fields are assigned onto the stored record; everything else is left as
//! it was. Fields that are themselves optional use `Option<Option<T>>` so a
//! patch can clear them.

pub mod category;
pub mod task;
