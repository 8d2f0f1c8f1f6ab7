//! Entity structs for all Taskit domain objects.
//!
//! Each entity is stored as one element of a JSON array under its own
//! persistent-store key. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON roundtrip and schema validation.

mod category;
mod task;

pub use category::{Category, NewCategory};
pub use task::{NewTask, Task};
