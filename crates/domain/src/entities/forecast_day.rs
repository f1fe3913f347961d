//! Daily forecast entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::WeatherCode;

/// Forecast for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Forecast date
    pub date: NaiveDate,
    /// Maximum temperature
    pub temperature_max: f64,
    /// Minimum temperature
    pub temperature_min: f64,
    /// Maximum apparent temperature
    pub feels_like_max: f64,
    /// Minimum apparent temperature
    pub feels_like_min: f64,
    /// Dominant WMO weather code
    pub weather_code: WeatherCode,
    /// Total precipitation in mm
    pub precipitation_sum: f64,
    /// Precipitation probability percentage (0-100)
    pub precipitation_probability: u8,
    /// Sunrise timestamp
    pub sunrise: DateTime<Utc>,
    /// Sunset timestamp
    pub sunset: DateTime<Utc>,
    /// Maximum UV index
    pub uv_index: f64,
}

impl ForecastDay {
    /// Human-readable condition description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.weather_code.description()
    }

    /// Icon key for the condition
    ///
    /// Daily rows always use the day variant of the icon.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        self.weather_code.icon(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(code: u16) -> ForecastDay {
        ForecastDay {
            date: NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date"),
            temperature_max: 24.0,
            temperature_min: 14.5,
            feels_like_max: 23.1,
            feels_like_min: 13.8,
            weather_code: WeatherCode(code),
            precipitation_sum: 1.2,
            precipitation_probability: 40,
            sunrise: Utc.with_ymd_and_hms(2026, 8, 7, 4, 28, 0).single().expect("valid"),
            sunset: Utc.with_ymd_and_hms(2026, 8, 7, 19, 12, 0).single().expect("valid"),
            uv_index: 5.4,
        }
    }

    #[test]
    fn icon_is_always_day_variant() {
        assert_eq!(sample(0).icon(), "sun");
        assert_eq!(sample(2).icon(), "cloud-sun");
    }

    #[test]
    fn description_comes_from_code() {
        assert_eq!(sample(80).description(), "Slight rain showers");
    }

    #[test]
    fn serialization_round_trip() {
        let day = sample(63);
        let json = serde_json::to_string(&day).expect("serialize");
        let parsed: ForecastDay = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed.date, day.date);
        assert_eq!(parsed.weather_code, WeatherCode(63));
        assert_eq!(parsed.sunrise, day.sunrise);
    }
}
