//! Location resolver service
//!
//! Determines the dashboard's best-known location: a previously persisted
//! choice short-circuits everything; otherwise the positioning source is
//! asked once and the coordinate is reverse-resolved through the search
//! endpoint. A manual override replaces the current location immediately.

use std::sync::Arc;

use domain::Location;
use domain::value_objects::Timezone;
use parking_lot::RwLock;
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, GeolocationPort, StatePort, StatePortExt, keys};

/// Resolves and remembers the current location
pub struct LocationService {
    geolocator: Option<Arc<dyn GeolocationPort>>,
    geocoding: Arc<dyn GeocodingPort>,
    state: Arc<dyn StatePort>,
    local_timezone: Timezone,
    current: RwLock<Option<Location>>,
}

impl std::fmt::Debug for LocationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationService")
            .field("has_geolocator", &self.geolocator.is_some())
            .field("current", &self.current.read().as_ref().map(Location::id))
            .finish_non_exhaustive()
    }
}

impl LocationService {
    /// Create a resolver
    ///
    /// `geolocator` is the host's positioning capability; `None` means the
    /// capability is absent. `local_timezone` is used for the synthetic
    /// current-position entry, which carries no geocoded timezone.
    #[must_use]
    pub fn new(
        geolocator: Option<Arc<dyn GeolocationPort>>,
        geocoding: Arc<dyn GeocodingPort>,
        state: Arc<dyn StatePort>,
        local_timezone: Timezone,
    ) -> Self {
        Self {
            geolocator,
            geocoding,
            state,
            local_timezone,
            current: RwLock::new(None),
        }
    }

    /// The current best-known location, if any
    #[must_use]
    pub fn current(&self) -> Option<Location> {
        self.current.read().clone()
    }

    /// Resolve the location for this session
    ///
    /// Protocol: a persisted location is used as-is and the positioning
    /// source is skipped entirely. Otherwise the positioning source is
    /// asked once; its coordinate is reverse-resolved via the search
    /// endpoint (first match wins) or, with no match, synthesized as the
    /// current-position entry. Whichever location is obtained is
    /// persisted. All failures are terminal for the attempt - recovery
    /// takes an explicit new action such as a search.
    #[instrument(skip(self))]
    pub async fn resolve(&self) -> Result<Location, ApplicationError> {
        if let Some(saved) = self.state.load::<Location>(keys::LOCATION).await? {
            debug!(id = saved.id(), "Using persisted location");
            *self.current.write() = Some(saved.clone());
            return Ok(saved);
        }

        let Some(geolocator) = &self.geolocator else {
            return Err(ApplicationError::GeolocationUnsupported);
        };

        let position = geolocator
            .current_position()
            .await
            .map_err(|e| ApplicationError::Geolocation(e.to_string()))?;

        let matches = self.geocoding.search(&position.as_query()).await?;
        let location = matches.into_iter().next().map_or_else(
            || {
                debug!("No reverse-geocoding match, synthesizing current position");
                Location::current_position(position, self.local_timezone.clone())
            },
            |found| found,
        );

        self.state.store(keys::LOCATION, &location).await?;
        info!(id = location.id(), name = %location.name(), "Resolved location");
        *self.current.write() = Some(location.clone());
        Ok(location)
    }

    /// Replace the current location immediately and persist it
    #[instrument(skip(self, location), fields(id = location.id()))]
    pub async fn set_manual(&self, location: Location) -> Result<(), ApplicationError> {
        self.state.store(keys::LOCATION, &location).await?;
        info!(id = location.id(), name = %location.name(), "Location set manually");
        *self.current.write() = Some(location);
        Ok(())
    }
}
