//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while cleaning up the contacts store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database file could not be opened
    #[error("Failed to open database '{}': {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A statement failed (missing table or column, locked database, ...)
    #[error("Query failed: {0}")]
    Query(#[from] rusqlite::Error),

    /// Closing the connection failed
    #[error("Failed to close database: {0}")]
    Close(#[source] rusqlite::Error),
}
