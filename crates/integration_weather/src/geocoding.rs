//! Open-Meteo geocoding client
//!
//! Location search by free-form name or "lat,lon" text. A response
//! without a result set means zero matches, not an error.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use domain::Location;
use domain::value_objects::{GeoLocation, Timezone};

use crate::client::WeatherApiError;
use crate::models::GeocodingResponse;

/// Maximum number of matches requested per search
const RESULT_COUNT: u8 = 10;

/// Geocoding client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    /// Geocoding API base URL (default: <https://geocoding-api.open-meteo.com/v1>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// One raw geocoding match
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingMatch {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
}

impl GeocodingMatch {
    /// Convert the raw match into a domain location
    ///
    /// Returns `None` when the reported coordinates are out of range.
    #[must_use]
    pub fn into_location(self) -> Option<Location> {
        let coordinates = GeoLocation::new(self.latitude, self.longitude).ok()?;
        let timezone = self.timezone.map_or_else(Timezone::utc, Timezone::from);
        Some(Location::new(
            self.id,
            self.name,
            self.country.unwrap_or_default(),
            coordinates,
            timezone,
            self.admin1,
        ))
    }
}

/// Open-Meteo geocoding HTTP client
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    client: Client,
    config: GeocodingConfig,
}

impl GeocodingClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeocodingConfig) -> Result<Self, WeatherApiError> {
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
        Self::new(GeocodingConfig::default())
    }

    /// Search for locations matching a query
    ///
    /// Returns matches in upstream ranking order; zero matches (including
    /// an absent result set) yields an empty list.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<GeocodingMatch>, WeatherApiError> {
        let url = format!(
            "{}/search?name={}&count={}&language=en&format=json",
            self.config.base_url,
            urlencode(query),
            RESULT_COUNT,
        );
        debug!(url = %url, "Searching locations");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(WeatherApiError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherApiError::RequestFailed(format!("HTTP {status}")));
        }

        let body: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| WeatherApiError::ParseError(e.to_string()))?;

        let matches = body.results.unwrap_or_default();
        debug!(count = matches.len(), "Search complete");
        Ok(matches)
    }
}

/// Percent-encode a query value for safe URL embedding
fn urlencode(input: &str) -> String {
    let mut result = String::with_capacity(input.len() * 2);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            },
            _ => {
                result.push('%');
                result.push_str(&format!("{byte:02X}"));
            },
        }
    }
    result
}
