//! Forecast adapter - Implements ForecastPort using integration_weather

use application::error::ApplicationError;
use application::ports::ForecastPort;
use async_trait::async_trait;
use domain::WeatherData;
use domain::value_objects::{GeoLocation, UnitSystem};
use integration_weather::{OpenMeteoClient, WeatherApiConfig, WeatherApiError, normalize};
use tracing::{debug, instrument};

/// Adapter fetching and normalizing forecasts via the Open-Meteo API
#[derive(Debug, Clone)]
pub struct ForecastAdapter {
    client: OpenMeteoClient,
}

impl ForecastAdapter {
    /// Create an adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::with_defaults().map_err(map_error)?;
        Ok(Self { client })
    }

    /// Create an adapter with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherApiConfig) -> Result<Self, ApplicationError> {
        let client = OpenMeteoClient::new(config).map_err(map_error)?;
        Ok(Self { client })
    }
}

/// Map integration errors to application errors
fn map_error(err: WeatherApiError) -> ApplicationError {
    match err {
        WeatherApiError::ConnectionFailed(e)
        | WeatherApiError::RequestFailed(e)
        | WeatherApiError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
        WeatherApiError::ParseError(e) => ApplicationError::Internal(e),
        WeatherApiError::RateLimitExceeded => {
            ApplicationError::ExternalService("rate limit exceeded".to_string())
        },
    }
}

#[async_trait]
impl ForecastPort for ForecastAdapter {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_forecast(
        &self,
        location: &GeoLocation,
        units: UnitSystem,
    ) -> Result<WeatherData, ApplicationError> {
        let response = self
            .client
            .fetch_forecast(location, units)
            .await
            .map_err(map_error)?;

        let data = normalize(&response, units).map_err(map_error)?;
        debug!(
            daily = data.daily.len(),
            hourly = data.hourly.len(),
            "Retrieved weather data"
        );
        Ok(data)
    }
}
