//! Local filesystem storage backend
//!
//! Thin wrapper over `std::fs` that resolves paths against a base
//! directory and maps errors into `StorageError`.

use super::StorageError;
use std::path::{Path, PathBuf};

/// Local filesystem storage backend
#[derive(Debug, Clone)]
pub struct LocalStorage {
    /// Base directory for relative paths (usually current working directory)
    base_dir: PathBuf,
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalStorage {
    /// Create a new local storage backend rooted at the current directory
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
        }
    }

    /// Create a local storage backend with a custom base directory
    #[cfg(test)]
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolve a path relative to the base directory. Absolute paths pass through.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(path)
    }

    /// Read a file as bytes
    pub fn read(&self, path: impl AsRef<Path>) -> Result<Vec<u8>, StorageError> {
        Ok(std::fs::read(self.resolve(path))?)
    }

    /// Write a file, creating parent directories as needed
    pub fn write(&self, path: impl AsRef<Path>, data: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&full_path, data)?;
        Ok(())
    }
}
