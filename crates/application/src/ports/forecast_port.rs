//! Forecast port
//!
//! Defines the interface for fetching normalized weather data.

use async_trait::async_trait;
use domain::value_objects::{GeoLocation, UnitSystem};
use domain::WeatherData;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching a complete weather snapshot
///
/// Implementations call the upstream forecast API and normalize its
/// payload into the domain model; one call yields current, hourly and
/// daily data for the given coordinates in the given unit system.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch and normalize the forecast for a location
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<WeatherData, ApplicationError>;
}
