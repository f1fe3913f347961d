//! State port definition
//!
//! Defines the interface for the local key-value state that backs the
//! location, favorites, preferences and theme stores. Values are stored
//! as serialized text - the extension trait handles typing.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::warn;

use crate::error::ApplicationError;

/// Well-known state keys
pub mod keys {
    /// Last resolved or manually chosen location
    pub const LOCATION: &str = "location";
    /// Ordered list of favorite locations
    pub const FAVORITES: &str = "favorites";
    /// User preferences (units, refresh interval)
    pub const PREFERENCES: &str = "preferences";
    /// Display theme
    pub const THEME: &str = "theme";
}

/// Port for local key-value state
///
/// Implementations must flush a `put` before returning so that state
/// survives an immediate process exit. Removing a missing key is a no-op.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StatePort: Send + Sync + std::fmt::Debug {
    /// Get the serialized value for a key, if present
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError>;

    /// Set the serialized value for a key, replacing any previous value
    async fn put(&self, key: &str, value: String) -> Result<(), ApplicationError>;

    /// Remove a key; missing keys are ignored
    async fn remove(&self, key: &str) -> Result<(), ApplicationError>;
}

/// Extension trait for typed state operations
///
/// Provides typed load/store on top of the raw text interface. A value
/// that fails to deserialize is treated as corrupted: the key is removed,
/// the failure is logged, and the caller sees `None` - deserialization
/// problems never propagate as errors.
#[async_trait]
pub trait StatePortExt: StatePort {
    /// Load a typed value, discarding a corrupted one
    async fn load<T>(&self, key: &str) -> Result<Option<T>, ApplicationError>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        match self.get(key).await? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Some(value)),
                Err(e) => {
                    warn!(key = %key, error = %e, "Discarding corrupted persisted value");
                    self.remove(key).await?;
                    Ok(None)
                },
            },
            None => Ok(None),
        }
    }

    /// Store a typed value
    async fn store<T>(&self, key: &str, value: &T) -> Result<(), ApplicationError>
    where
        T: serde::Serialize + Sync,
    {
        let raw = serde_json::to_string(value)
            .map_err(|e| ApplicationError::Internal(format!("State serialization error: {e}")))?;
        self.put(key, raw).await
    }
}

// Blanket implementation for all StatePort implementors
impl<T: StatePort + ?Sized> StatePortExt for T {}
