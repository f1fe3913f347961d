//! Aggregated weather data entity

use serde::{Deserialize, Serialize};

use super::{CurrentWeather, ForecastDay, HourlyForecast};
use crate::value_objects::UnitSystem;

/// Number of hourly slots a fetch keeps, regardless of how many the
/// upstream API returned
pub const HOURLY_WINDOW: usize = 24;

/// One complete weather fetch result
///
/// Invariants: `hourly` holds at most [`HOURLY_WINDOW`] entries in
/// upstream order, and `units` always names the unit system the
/// underlying fetch was issued with. Each fetch produces a fresh value
/// that fully replaces the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherData {
    /// Current conditions
    pub current: CurrentWeather,
    /// Daily forecast, chronological, upstream order preserved
    pub daily: Vec<ForecastDay>,
    /// Hourly forecast, first [`HOURLY_WINDOW`] upstream slots
    pub hourly: Vec<HourlyForecast>,
    /// Unit system the data was fetched in
    pub units: UnitSystem,
}

impl WeatherData {
    /// Assemble a fetch result, enforcing the hourly window invariant
    #[must_use]
    pub fn new(
        current: CurrentWeather,
        daily: Vec<ForecastDay>,
        mut hourly: Vec<HourlyForecast>,
        units: UnitSystem,
    ) -> Self {
        hourly.truncate(HOURLY_WINDOW);
        Self {
            current,
            daily,
            hourly,
            units,
        }
    }

    /// Today's forecast row, when present
    #[must_use]
    pub fn today(&self) -> Option<&ForecastDay> {
        self.daily.first()
    }
}
