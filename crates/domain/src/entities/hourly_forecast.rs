//! Hourly forecast entity

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::value_objects::WeatherCode;

/// First daylight hour (inclusive) of the authoritative daylight window
const DAYLIGHT_START_HOUR: u32 = 6;
/// First night hour (exclusive end) of the authoritative daylight window
const DAYLIGHT_END_HOUR: u32 = 18;

/// Whether a local hour-of-day falls in the daylight window `[6, 18)`
///
/// This window is the single source of truth for hourly day/night icon
/// selection; it is applied once at normalization time and never
/// recomputed downstream.
#[must_use]
pub const fn is_daylight_hour(hour: u32) -> bool {
    hour >= DAYLIGHT_START_HOUR && hour < DAYLIGHT_END_HOUR
}

/// Forecast for one hour slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Local wall-clock time of the slot
    pub time: NaiveDateTime,
    /// Temperature
    pub temperature: f64,
    /// Apparent temperature
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Precipitation probability percentage (0-100)
    pub precipitation_probability: u8,
    /// Precipitation in mm
    pub precipitation: f64,
    /// WMO weather code
    pub weather_code: WeatherCode,
    /// Wind speed
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: u16,
    /// UV index
    pub uv_index: f64,
    /// Visibility in meters
    pub visibility: f64,
    /// Whether the slot falls in the daylight window
    pub is_day: bool,
}

impl HourlyForecast {
    /// Derive the day flag for a slot from its own local timestamp
    #[must_use]
    pub fn day_flag_for(time: NaiveDateTime) -> bool {
        is_daylight_hour(time.hour())
    }

    /// Human-readable condition description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.weather_code.description()
    }

    /// Icon key for the condition
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.weather_code.icon(self.is_day)
    }
}
