//! Persistence error types for taskit-store.

use thiserror::Error;

/// Errors from the persistent store.
///
/// Repositories catch these at their boundary and log them; only callers
/// talking to a [`PersistentStore`](crate::store::PersistentStore) directly
/// ever see one.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a backing file failed.
    #[error("I/O error on '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A collection could not be encoded as JSON.
    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The data directory could not be created or resolved.
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}
