use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to determine a platform data directory.
    #[error("Could not determine application data directory")]
    NoDataDir,

    /// Generic I/O error (e.g. creating the database directory).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Migration failure.
    #[error("Migration error: {0}")]
    Migration(String),

    /// JSON encoding of a stored value failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A stored value that must be text was not valid UTF-8.
    #[error("Stored value for key '{0}' is not valid UTF-8")]
    InvalidUtf8(String),

    /// Backend-specific failure (e.g. a poisoned lock in the memory store).
    #[error("Store backend error: {0}")]
    Backend(String),

    /// The directory has no record for the given username.
    #[error("User not found: {0}")]
    UserNotFound(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
