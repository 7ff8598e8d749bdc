//! Error types for the persistence boundary

use thiserror::Error;

/// Errors that can occur while reading or writing the key-value store
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Atomic replace of the target file failed
    #[error("Failed to persist {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// No usable directory to store data in
    #[error("No data directory available")]
    NoDataDir,
}

/// Result type alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
