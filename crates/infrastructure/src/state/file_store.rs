//! File-backed state store
//!
//! One text file per key inside a state directory. Writes are flushed
//! before the call returns, so state survives an immediate process exit.
//! Filesystem calls go through `spawn_blocking`.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::StatePort;
use async_trait::async_trait;
use tokio::task;
use tracing::{debug, instrument};

/// File-per-key state store
#[derive(Debug, Clone)]
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Create a store rooted at the given directory
    ///
    /// The directory is created on the first write, not here.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing a key
    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read_key(path: &Path) -> Result<Option<String>, ApplicationError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ApplicationError::Internal(format!(
                "Failed to read state file {}: {e}",
                path.display()
            ))),
        }
    }

    fn write_key(dir: &Path, path: &Path, value: &str) -> Result<(), ApplicationError> {
        std::fs::create_dir_all(dir).map_err(|e| {
            ApplicationError::Internal(format!(
                "Failed to create state directory {}: {e}",
                dir.display()
            ))
        })?;

        let mut file = std::fs::File::create(path).map_err(|e| {
            ApplicationError::Internal(format!(
                "Failed to create state file {}: {e}",
                path.display()
            ))
        })?;
        file.write_all(value.as_bytes()).map_err(|e| {
            ApplicationError::Internal(format!(
                "Failed to write state file {}: {e}",
                path.display()
            ))
        })?;
        file.sync_all().map_err(|e| {
            ApplicationError::Internal(format!(
                "Failed to flush state file {}: {e}",
                path.display()
            ))
        })
    }

    fn remove_key(path: &Path) -> Result<(), ApplicationError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApplicationError::Internal(format!(
                "Failed to remove state file {}: {e}",
                path.display()
            ))),
        }
    }
}

#[async_trait]
impl StatePort for FileStateStore {
    #[instrument(skip(self), level = "debug")]
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        let path = self.key_path(key);
        let value = task::spawn_blocking(move || Self::read_key(&path))
            .await
            .map_err(|e| ApplicationError::Internal(format!("Task join error: {e}")))??;
        debug!(key = %key, found = value.is_some(), "State read");
        Ok(value)
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn put(&self, key: &str, value: String) -> Result<(), ApplicationError> {
        let dir = self.dir.clone();
        let path = self.key_path(key);
        task::spawn_blocking(move || Self::write_key(&dir, &path, &value))
            .await
            .map_err(|e| ApplicationError::Internal(format!("Task join error: {e}")))??;
        debug!(key = %key, "State written");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        let path = self.key_path(key);
        task::spawn_blocking(move || Self::remove_key(&path))
            .await
            .map_err(|e| ApplicationError::Internal(format!("Task join error: {e}")))??;
        debug!(key = %key, "State removed");
        Ok(())
    }
}
