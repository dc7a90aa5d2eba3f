//! Storage Layer
//!
//! Local filesystem access plus the save-game format built on top of it.
//! Every operation is synchronous and returns a `StorageError` on failure;
//! callers decide whether to log and carry on.

pub mod local;
pub mod save;

use std::fmt;

pub use local::LocalStorage;
pub use save::{SaveGame, SaveSlot};

/// Storage error types
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// File or directory not found
    NotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// I/O error
    IoError(String),
    /// Serialization/deserialization error
    SerdeError(String),
    /// Well-formed data that can't be applied (e.g. a position outside the world)
    InvalidData(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(path) => write!(f, "not found: {}", path),
            StorageError::PermissionDenied(msg) => write!(f, "permission denied: {}", msg),
            StorageError::IoError(msg) => write!(f, "I/O error: {}", msg),
            StorageError::SerdeError(msg) => write!(f, "serialization error: {}", msg),
            StorageError::InvalidData(msg) => write!(f, "invalid data: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(e.to_string()),
            std::io::ErrorKind::PermissionDenied => StorageError::PermissionDenied(e.to_string()),
            _ => StorageError::IoError(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::SerdeError(e.to_string())
    }
}
