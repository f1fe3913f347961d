//! Favorites store service
//!
//! A deduplicated, insertion-ordered list of saved locations keyed by
//! location id, persisted in full on every mutation.

use std::sync::Arc;

use domain::Location;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{StatePort, StatePortExt, keys};

/// Persisted favorites store
pub struct FavoritesService {
    state: Arc<dyn StatePort>,
    favorites: RwLock<Vec<Location>>,
}

impl std::fmt::Debug for FavoritesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesService")
            .field("count", &self.favorites.read().len())
            .finish_non_exhaustive()
    }
}

impl FavoritesService {
    /// Create an empty store; call [`load`](Self::load) to pick up
    /// persisted favorites
    #[must_use]
    pub fn new(state: Arc<dyn StatePort>) -> Self {
        Self {
            state,
            favorites: RwLock::new(Vec::new()),
        }
    }

    /// Load persisted favorites
    ///
    /// A corrupted persisted value is discarded and the list starts
    /// empty; the failure never reaches the caller.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), ApplicationError> {
        let loaded = self
            .state
            .load::<Vec<Location>>(keys::FAVORITES)
            .await?
            .unwrap_or_default();
        debug!(count = loaded.len(), "Loaded favorites");
        *self.favorites.write() = loaded;
        Ok(())
    }

    /// Current favorites in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<Location> {
        self.favorites.read().clone()
    }

    /// Whether a location id is favorited
    #[must_use]
    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorites.read().iter().any(|l| l.id() == id)
    }

    /// Add a favorite; a duplicate id is a no-op
    #[instrument(skip(self, location), fields(id = location.id()))]
    pub async fn add(&self, location: Location) -> Result<(), ApplicationError> {
        let updated = {
            let mut favorites = self.favorites.write();
            if favorites.iter().any(|l| l.id() == location.id()) {
                debug!("Location already favorited");
                return Ok(());
            }
            favorites.push(location);
            favorites.clone()
        };
        self.state.store(keys::FAVORITES, &updated).await
    }

    /// Remove a favorite by id; a missing id is a no-op
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<(), ApplicationError> {
        let updated = {
            let mut favorites = self.favorites.write();
            let before = favorites.len();
            favorites.retain(|l| l.id() != id);
            if favorites.len() == before {
                debug!("Location was not favorited");
                return Ok(());
            }
            favorites.clone()
        };
        self.state.store(keys::FAVORITES, &updated).await
    }
}
