//! Geocoding adapter - Implements GeocodingPort using integration_weather

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::Location;
use integration_weather::{GeocodingClient, GeocodingConfig, WeatherApiError};
use tracing::{debug, instrument};

/// Adapter searching locations via the Open-Meteo geocoding API
#[derive(Debug, Clone)]
pub struct GeocodingAdapter {
    client: GeocodingClient,
}

impl GeocodingAdapter {
    /// Create an adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new() -> Result<Self, ApplicationError> {
        let client = GeocodingClient::with_defaults().map_err(map_error)?;
        Ok(Self { client })
    }

    /// Create an adapter with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: GeocodingConfig) -> Result<Self, ApplicationError> {
        let client = GeocodingClient::new(config).map_err(map_error)?;
        Ok(Self { client })
    }
}

fn map_error(err: WeatherApiError) -> ApplicationError {
    match err {
        WeatherApiError::ParseError(e) => ApplicationError::Internal(e),
        other => ApplicationError::ExternalService(other.to_string()),
    }
}

#[async_trait]
impl GeocodingPort for GeocodingAdapter {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<Vec<Location>, ApplicationError> {
        let matches = self.client.search(query).await.map_err(map_error)?;
        // Matches with out-of-range coordinates are dropped rather than
        // failing the whole search.
        let locations: Vec<Location> = matches
            .into_iter()
            .filter_map(integration_weather::GeocodingMatch::into_location)
            .collect();
        debug!(count = locations.len(), "Search complete");
        Ok(locations)
    }
}
