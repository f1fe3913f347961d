//! Dashboard aggregation service
//!
//! Composes the location resolver, the fetch orchestrator, and the
//! preference/favorite stores into one read/write surface for
//! presentation code. Carries no logic of its own beyond wiring -
//! forwarding actions, OR-combining loading flags, surfacing the first
//! non-null error - plus theme persistence.

use std::sync::Arc;

use domain::value_objects::{Theme, UnitSystem};
use domain::{AirQuality, Location, UserPreferences, WeatherData};
use parking_lot::RwLock;
use tracing::{instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{StatePort, StatePortExt, keys};
use crate::services::{
    FavoritesService, LocationService, PreferencesService, WeatherService,
};

/// Combined read model for presentation code
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    /// Current best-known location
    pub location: Option<Location>,
    /// Latest weather data
    pub weather: Option<WeatherData>,
    /// Latest air-quality reading
    pub air_quality: Option<AirQuality>,
    /// Whether any composed part is busy
    pub loading: bool,
    /// First non-null error across the composed parts
    pub error: Option<String>,
    /// Active preferences
    pub preferences: UserPreferences,
    /// Active theme
    pub theme: Theme,
    /// Favorites in insertion order
    pub favorites: Vec<Location>,
}

/// One read/write surface over the dashboard's state
pub struct DashboardService {
    location: LocationService,
    weather: WeatherService,
    preferences: PreferencesService,
    favorites: FavoritesService,
    state: Arc<dyn StatePort>,
    theme: RwLock<Theme>,
    location_error: RwLock<Option<String>>,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("location", &self.location)
            .field("weather", &self.weather)
            .finish_non_exhaustive()
    }
}

impl DashboardService {
    /// Wire the composed services together
    #[must_use]
    pub fn new(
        location: LocationService,
        weather: WeatherService,
        preferences: PreferencesService,
        favorites: FavoritesService,
        state: Arc<dyn StatePort>,
    ) -> Self {
        Self {
            location,
            weather,
            preferences,
            favorites,
            state,
            theme: RwLock::new(Theme::default()),
            location_error: RwLock::new(None),
        }
    }

    /// Load the persisted preference, favorite and theme state
    ///
    /// Part of [`initialize`](Self::initialize); also useful on its own
    /// for commands that mutate settings without fetching weather.
    #[instrument(skip(self))]
    pub async fn load_persisted(&self) -> Result<(), ApplicationError> {
        self.preferences.load().await?;
        self.favorites.load().await?;
        if let Some(theme) = self.state.load::<Theme>(keys::THEME).await? {
            *self.theme.write() = theme;
        }
        Ok(())
    }

    /// Bring the dashboard up: load persisted state, resolve the
    /// location, run the initial fetch, and arm the auto-refresh timer
    ///
    /// A failed location resolution or initial fetch degrades to an
    /// error in the snapshot rather than failing initialization.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<(), ApplicationError> {
        self.load_persisted().await?;

        match self.location.resolve().await {
            Ok(location) => {
                *self.location_error.write() = None;
                if let Err(e) = self
                    .weather
                    .fetch(Some(&location), self.preferences.units())
                    .await
                {
                    warn!(error = %e, "Initial weather fetch failed");
                }
                self.weather
                    .schedule_refresh(self.preferences.update_interval());
            },
            Err(e) => {
                warn!(error = %e, "Location resolution failed");
                *self.location_error.write() = Some(e.to_string());
            },
        }
        Ok(())
    }

    /// Combined read model
    #[must_use]
    pub fn snapshot(&self) -> DashboardSnapshot {
        let weather = self.weather.snapshot();
        let location_error = self.location_error.read().clone();
        DashboardSnapshot {
            location: self.location.current(),
            weather: weather.weather,
            air_quality: weather.air_quality,
            loading: weather.loading,
            error: location_error.or(weather.error),
            preferences: self.preferences.current(),
            theme: *self.theme.read(),
            favorites: self.favorites.list(),
        }
    }

    /// Re-run the fetch for the current location and units
    pub async fn refresh(&self) -> Result<(), ApplicationError> {
        self.weather
            .fetch(self.location.current().as_ref(), self.preferences.units())
            .await
    }

    /// Manually override the location, refetch, and re-arm the timer
    #[instrument(skip(self, location), fields(id = location.id()))]
    pub async fn set_location(&self, location: Location) -> Result<(), ApplicationError> {
        self.location.set_manual(location.clone()).await?;
        *self.location_error.write() = None;
        let result = self
            .weather
            .fetch(Some(&location), self.preferences.units())
            .await;
        self.weather
            .schedule_refresh(self.preferences.update_interval());
        result
    }

    /// Change the unit system, refetch, and re-arm the timer
    #[instrument(skip(self))]
    pub async fn set_units(&self, units: UnitSystem) -> Result<(), ApplicationError> {
        self.preferences.set_units(units).await?;
        let result = self
            .weather
            .fetch(self.location.current().as_ref(), units)
            .await;
        self.weather
            .schedule_refresh(self.preferences.update_interval());
        result
    }

    /// Change the auto-refresh interval and re-arm the timer
    #[instrument(skip(self))]
    pub async fn set_update_interval(&self, minutes: u32) -> Result<(), ApplicationError> {
        self.preferences.set_update_interval(minutes).await?;
        self.weather.schedule_refresh(minutes);
        Ok(())
    }

    /// Active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        *self.theme.read()
    }

    /// Change and persist the theme
    #[instrument(skip(self))]
    pub async fn set_theme(&self, theme: Theme) -> Result<(), ApplicationError> {
        self.state.store(keys::THEME, &theme).await?;
        *self.theme.write() = theme;
        Ok(())
    }

    /// Add a favorite (no-op on duplicate id)
    pub async fn add_favorite(&self, location: Location) -> Result<(), ApplicationError> {
        self.favorites.add(location).await
    }

    /// Remove a favorite by id (no-op when absent)
    pub async fn remove_favorite(&self, id: i64) -> Result<(), ApplicationError> {
        self.favorites.remove(id).await
    }

    /// Whether a location id is favorited
    #[must_use]
    pub fn is_favorite(&self, id: i64) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Whether the auto-refresh timer is armed
    #[must_use]
    pub fn is_refresh_armed(&self) -> bool {
        self.weather.is_refresh_armed()
    }

    /// Tear down the auto-refresh timer and any in-flight refresh
    pub fn shutdown(&self) {
        self.weather.cancel_refresh();
    }
}
