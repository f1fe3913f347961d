//! Current weather entity

use serde::{Deserialize, Serialize};

use crate::value_objects::WeatherCode;

/// Point-in-time weather snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in the fetch's unit system
    pub temperature: f64,
    /// Apparent (feels like) temperature
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
    /// Precipitation in mm
    pub precipitation: f64,
    /// WMO weather code
    pub weather_code: WeatherCode,
    /// Wind speed in the fetch's unit system
    pub wind_speed: f64,
    /// Wind direction in degrees (0-360)
    pub wind_direction: u16,
    /// Whether the observation falls in daylight
    pub is_day: bool,
    /// Surface pressure in hPa
    pub pressure: f64,
}

impl CurrentWeather {
    /// Human-readable condition description, derived from the weather code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.weather_code.description()
    }

    /// Icon key for the condition, derived from the weather code and the
    /// day flag
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.weather_code.icon(self.is_day)
    }
}
