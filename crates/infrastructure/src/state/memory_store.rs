//! In-memory state store
//!
//! State port implementation backed by a map. Nothing survives the
//! process; useful for tests and ephemeral runs.

use std::collections::HashMap;

use application::error::ApplicationError;
use application::ports::StatePort;
use async_trait::async_trait;
use parking_lot::RwLock;

/// Map-backed state store
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStateStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl StatePort for MemoryStateStore {
    async fn get(&self, key: &str) -> Result<Option<String>, ApplicationError> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn put(&self, key: &str, value: String) -> Result<(), ApplicationError> {
        self.entries.write().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), ApplicationError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trip() {
        let store = MemoryStateStore::new();
        assert!(store.is_empty());

        store.put("location", "{}".to_string()).await.expect("put");
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("location").await.expect("get").as_deref(),
            Some("{}")
        );

        store.remove("location").await.expect("remove");
        assert!(store.get("location").await.expect("get").is_none());
    }

    #[tokio::test]
    async fn remove_missing_is_noop() {
        let store = MemoryStateStore::new();
        store.remove("nope").await.expect("remove");
    }
}
