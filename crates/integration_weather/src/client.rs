//! Open-Meteo forecast client
//!
//! HTTP client for the Open-Meteo forecast endpoint. Requests the exact
//! current/hourly/daily variable sets the dashboard consumes, with
//! `timezone=auto` so all returned times are local to the location.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use domain::value_objects::{GeoLocation, UnitSystem};

use crate::models::ForecastResponse;

/// Variables requested for the `current` block
const CURRENT_VARS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,is_day,\
                            precipitation,weather_code,surface_pressure,wind_speed_10m,\
                            wind_direction_10m";

/// Variables requested for the `hourly` block
const HOURLY_VARS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,\
                           precipitation_probability,precipitation,weather_code,visibility,\
                           wind_speed_10m,wind_direction_10m,uv_index";

/// Variables requested for the `daily` block
const DAILY_VARS: &str = "weather_code,temperature_2m_max,temperature_2m_min,\
                          apparent_temperature_max,apparent_temperature_min,sunrise,sunset,\
                          uv_index_max,precipitation_sum,precipitation_probability_max";

/// Weather API errors
#[derive(Debug, Error)]
pub enum WeatherApiError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response payload
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Forecast client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherApiConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Open-Meteo forecast HTTP client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: WeatherApiConfig,
}

impl OpenMeteoClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherApiError> {
        Self::new(WeatherApiConfig::default())
    }

    /// Build the forecast request URL for a location and unit system
    fn build_forecast_url(&self, location: &GeoLocation, units: UnitSystem) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current={}&hourly={}&daily={}\
             &timezone=auto&temperature_unit={}&wind_speed_unit={}",
            self.config.base_url,
            location.latitude(),
            location.longitude(),
            CURRENT_VARS,
            HOURLY_VARS,
            DAILY_VARS,
            units.temperature_param(),
            units.wind_speed_param(),
        )
    }

    /// Fetch the raw forecast payload for a location
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude(), units = %units))]
    pub async fn fetch_forecast(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<ForecastResponse, WeatherApiError> {
        let url = self.build_forecast_url(location, units);
        debug!(url = %url, "Fetching forecast");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherApiError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherApiError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherApiError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| WeatherApiError::ParseError(e.to_string()))
    }
}
