//! Error types for options loading, persistence and file watching.

use thiserror::Error;

/// Errors that can occur outside the pure layout core
#[derive(Error, Debug)]
pub enum GridError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Options parsed but describe an unusable grid
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// The options file could not be moved into place
    #[error("Could not persist options: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// File watcher error from notify
    #[error("Watch error: {0}")]
    Watch(#[from] notify::Error),
}

/// Result type alias for fallible grid operations
pub type GridResult<T> = Result<T, GridError>;
