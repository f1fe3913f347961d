//! Weather fetch orchestrator
//!
//! Issues the forecast and air-quality fetches together, tracks
//! loading/error state, repeats the last fetch on demand, and drives the
//! interval-based auto-refresh timer.
//!
//! Every fetch carries a generation number; a completion whose generation
//! is no longer current is discarded, so a slow stale fetch can never
//! overwrite a newer result. The auto-refresh loop holds only a weak
//! reference to the orchestrator and is aborted on re-arm, teardown and
//! drop, which also cancels any request it has in flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use domain::value_objects::UnitSystem;
use domain::{AirQuality, Location, WeatherData};
use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::{AirQualityPort, ForecastPort};

/// Combined result of the latest fetch
#[derive(Debug, Clone, Default)]
pub struct WeatherSnapshot {
    /// Latest normalized weather data, if any fetch has succeeded
    pub weather: Option<WeatherData>,
    /// Latest air-quality reading, if any fetch has succeeded
    pub air_quality: Option<AirQuality>,
    /// Whether a fetch is currently in flight
    pub loading: bool,
    /// Failure reason of the latest fetch, if it failed
    pub error: Option<String>,
    /// When the latest successful fetch completed
    pub fetched_at: Option<DateTime<Utc>>,
}

struct Inner {
    forecast: Arc<dyn ForecastPort>,
    air_quality: Arc<dyn AirQualityPort>,
    snapshot: RwLock<WeatherSnapshot>,
    last_request: RwLock<Option<(Location, UnitSystem)>>,
    generation: AtomicU64,
    refresh_task: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(handle) = self.refresh_task.lock().take() {
            handle.abort();
        }
    }
}

/// Orchestrates weather and air-quality fetches
///
/// Cheap to clone; clones share the same state and timer.
#[derive(Clone)]
pub struct WeatherService {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.inner.snapshot.read();
        f.debug_struct("WeatherService")
            .field("loading", &snapshot.loading)
            .field("has_data", &snapshot.weather.is_some())
            .field("refresh_armed", &self.is_refresh_armed())
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create an orchestrator over the two data sources
    #[must_use]
    pub fn new(forecast: Arc<dyn ForecastPort>, air_quality: Arc<dyn AirQualityPort>) -> Self {
        Self {
            inner: Arc::new(Inner {
                forecast,
                air_quality,
                snapshot: RwLock::new(WeatherSnapshot::default()),
                last_request: RwLock::new(None),
                generation: AtomicU64::new(0),
                refresh_task: Mutex::new(None),
            }),
        }
    }

    /// Current combined fetch state
    #[must_use]
    pub fn snapshot(&self) -> WeatherSnapshot {
        self.inner.snapshot.read().clone()
    }

    /// Fetch weather and air quality for a location
    ///
    /// A `None` location is a no-op. Both fetches run concurrently and
    /// both must succeed: the first failure aborts the pair and neither
    /// field is updated. Results from a fetch that is no longer the
    /// newest are discarded.
    #[instrument(skip(self, location), fields(units = %units))]
    pub async fn fetch(
        &self,
        location: Option<&Location>,
        units: UnitSystem,
    ) -> Result<(), ApplicationError> {
        let Some(location) = location else {
            debug!("No location available, skipping fetch");
            return Ok(());
        };

        *self.inner.last_request.write() = Some((location.clone(), units));
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut snapshot = self.inner.snapshot.write();
            snapshot.loading = true;
            snapshot.error = None;
        }

        let coordinates = location.coordinates();
        let result = tokio::try_join!(
            self.inner.forecast.fetch_forecast(&coordinates, units),
            self.inner.air_quality.fetch_air_quality(&coordinates),
        );

        if self.inner.generation.load(Ordering::SeqCst) != generation {
            debug!(generation, "Discarding stale fetch result");
            return Ok(());
        }

        match result {
            Ok((weather, air_quality)) => {
                debug!(
                    daily = weather.daily.len(),
                    hourly = weather.hourly.len(),
                    "Fetch complete"
                );
                let mut snapshot = self.inner.snapshot.write();
                snapshot.weather = Some(weather);
                snapshot.air_quality = Some(air_quality);
                snapshot.loading = false;
                snapshot.error = None;
                snapshot.fetched_at = Some(Utc::now());
                Ok(())
            },
            Err(e) => {
                let mut snapshot = self.inner.snapshot.write();
                snapshot.loading = false;
                snapshot.error = Some(e.to_string());
                Err(e)
            },
        }
    }

    /// Repeat the last fetch; a no-op if nothing has been fetched yet
    pub async fn refresh(&self) -> Result<(), ApplicationError> {
        let last = self.inner.last_request.read().clone();
        match last {
            Some((location, units)) => self.fetch(Some(&location), units).await,
            None => Ok(()),
        }
    }

    /// Arm the auto-refresh timer, replacing any existing one
    ///
    /// A zero interval, or the absence of a previous fetch to repeat,
    /// leaves the timer disarmed. The previous timer (and any request it
    /// has in flight) is always torn down first.
    #[instrument(skip(self))]
    pub fn schedule_refresh(&self, interval_minutes: u32) {
        self.cancel_refresh();

        if interval_minutes == 0 {
            debug!("Auto-refresh disabled");
            return;
        }
        if self.inner.last_request.read().is_none() {
            debug!("No fetch to repeat, timer not armed");
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        let period = Duration::from_secs(u64::from(interval_minutes) * 60);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the initial fetch has
            // already happened by the time the timer is armed.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(inner) = weak.upgrade() else { break };
                let service = Self { inner };
                if let Err(e) = service.refresh().await {
                    warn!(error = %e, "Scheduled weather refresh failed");
                }
            }
        });
        *self.inner.refresh_task.lock() = Some(handle);
        debug!(interval_minutes, "Auto-refresh armed");
    }

    /// Tear down the auto-refresh timer, aborting any in-flight refresh
    pub fn cancel_refresh(&self) {
        if let Some(handle) = self.inner.refresh_task.lock().take() {
            handle.abort();
            debug!("Auto-refresh cancelled");
        }
    }

    /// Whether the auto-refresh timer is armed
    #[must_use]
    pub fn is_refresh_armed(&self) -> bool {
        self.inner.refresh_task.lock().is_some()
    }
}
