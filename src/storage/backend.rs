//! Backend trait for session storage.

use thiserror::Error;

/// Errors that can occur during session storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters that cannot be used as a storage name
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// String key/value storage scoped to one dashboard session.
///
/// Implementations must be safe to share between request handlers.
pub trait SessionStorage: Send + Sync {
    /// Backend type identifier (e.g. "memory", "file")
    fn backend_type(&self) -> &'static str;

    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
