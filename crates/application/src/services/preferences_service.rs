//! Preferences store service
//!
//! Load-merge-persist over the state port: saved values merge over
//! defaults at load time, a corrupted value silently resets to defaults,
//! and every mutation writes the full state back before returning.

use std::sync::Arc;

use domain::UserPreferences;
use domain::value_objects::UnitSystem;
use parking_lot::RwLock;
use tracing::{debug, instrument};

use crate::error::ApplicationError;
use crate::ports::{StatePort, StatePortExt, keys};

/// Persisted user preferences store
pub struct PreferencesService {
    state: Arc<dyn StatePort>,
    prefs: RwLock<UserPreferences>,
}

impl std::fmt::Debug for PreferencesService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferencesService")
            .field("prefs", &*self.prefs.read())
            .finish_non_exhaustive()
    }
}

impl PreferencesService {
    /// Create the store with defaults; call [`load`](Self::load) to pick
    /// up persisted values
    #[must_use]
    pub fn new(state: Arc<dyn StatePort>) -> Self {
        Self {
            state,
            prefs: RwLock::new(UserPreferences::default()),
        }
    }

    /// Load persisted preferences, merging saved values over defaults
    ///
    /// A corrupted persisted value is discarded and defaults remain; the
    /// failure never reaches the caller.
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<(), ApplicationError> {
        let loaded = self
            .state
            .load::<UserPreferences>(keys::PREFERENCES)
            .await?
            .unwrap_or_default();
        debug!(units = %loaded.units, interval = loaded.update_interval_minutes, "Loaded preferences");
        *self.prefs.write() = loaded;
        Ok(())
    }

    /// Current preferences snapshot
    #[must_use]
    pub fn current(&self) -> UserPreferences {
        self.prefs.read().clone()
    }

    /// Current unit system
    #[must_use]
    pub fn units(&self) -> UnitSystem {
        self.prefs.read().units
    }

    /// Current auto-refresh interval in minutes (`0` = disabled)
    #[must_use]
    pub fn update_interval(&self) -> u32 {
        self.prefs.read().update_interval_minutes
    }

    /// Change the unit system and persist the full state
    #[instrument(skip(self))]
    pub async fn set_units(&self, units: UnitSystem) -> Result<(), ApplicationError> {
        let updated = {
            let mut prefs = self.prefs.write();
            prefs.units = units;
            prefs.clone()
        };
        self.state.store(keys::PREFERENCES, &updated).await
    }

    /// Change the auto-refresh interval and persist the full state
    #[instrument(skip(self))]
    pub async fn set_update_interval(&self, minutes: u32) -> Result<(), ApplicationError> {
        let updated = {
            let mut prefs = self.prefs.write();
            prefs.update_interval_minutes = minutes;
            prefs.clone()
        };
        self.state.store(keys::PREFERENCES, &updated).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockStatePort;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn load_merges_partial_payload_over_defaults() {
        let mut state = MockStatePort::new();
        state
            .expect_get()
            .with(eq(keys::PREFERENCES))
            .returning(|_| Ok(Some(r#"{"units":"imperial"}"#.to_string())));

        let service = PreferencesService::new(Arc::new(state));
        service.load().await.expect("load");

        assert_eq!(service.units(), UnitSystem::Imperial);
        assert_eq!(service.update_interval(), 30);
    }

    #[tokio::test]
    async fn corrupted_payload_resets_to_defaults() {
        let mut state = MockStatePort::new();
        state
            .expect_get()
            .with(eq(keys::PREFERENCES))
            .returning(|_| Ok(Some("%%%".to_string())));
        state
            .expect_remove()
            .with(eq(keys::PREFERENCES))
            .times(1)
            .returning(|_| Ok(()));

        let service = PreferencesService::new(Arc::new(state));
        service.load().await.expect("load");

        let prefs = service.current();
        assert_eq!(prefs.units, UnitSystem::Metric);
        assert_eq!(prefs.update_interval_minutes, 30);
    }

    #[tokio::test]
    async fn set_units_persists_full_state() {
        let mut state = MockStatePort::new();
        state
            .expect_put()
            .withf(|key, value| {
                key == keys::PREFERENCES
                    && value.contains("\"units\":\"imperial\"")
                    && value.contains("\"update_interval_minutes\":30")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = PreferencesService::new(Arc::new(state));
        service
            .set_units(UnitSystem::Imperial)
            .await
            .expect("set units");
        assert_eq!(service.units(), UnitSystem::Imperial);
    }

    #[tokio::test]
    async fn set_interval_persists_full_state() {
        let mut state = MockStatePort::new();
        state
            .expect_put()
            .withf(|key, value| {
                key == keys::PREFERENCES && value.contains("\"update_interval_minutes\":0")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = PreferencesService::new(Arc::new(state));
        service.set_update_interval(0).await.expect("set interval");
        assert_eq!(service.update_interval(), 0);
    }

    #[tokio::test]
    async fn persistence_is_idempotent() {
        // Saving the same value twice must write the same payload twice.
        let mut state = MockStatePort::new();
        let mut payloads: Vec<String> = Vec::new();
        state.expect_put().times(2).returning(move |_, value| {
            payloads.push(value.clone());
            if payloads.len() == 2 {
                assert_eq!(payloads[0], payloads[1]);
            }
            Ok(())
        });

        let service = PreferencesService::new(Arc::new(state));
        service.set_update_interval(15).await.expect("first");
        service.set_update_interval(15).await.expect("second");
    }
}
