//! Application configuration
//!
//! Loaded from defaults, an optional `config.toml`, and `NIMBUS_*`
//! environment variable overrides (e.g. `NIMBUS_STORAGE_STATE_DIR`).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use domain::value_objects::GeoLocation;
use integration_weather::{GeocodingConfig, WeatherApiConfig};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Forecast API settings
    #[serde(default)]
    pub weather: WeatherApiConfig,

    /// Geocoding API settings
    #[serde(default)]
    pub geocoding: GeocodingConfig,

    /// Positioning source settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Local state storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Positioning source configuration
///
/// A headless host has no device positioning API; a fixed coordinate pair
/// configured here acts as the positioning source. When no coordinates
/// are configured the capability is reported as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Fixed position used as the positioning source
    ///
    /// Configured as inline table: `{ latitude = 48.85, longitude = 2.35 }`
    #[serde(default)]
    pub coordinates: Option<CoordinatesConfig>,

    /// IANA timezone for the synthetic current-position entry
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

/// Geographic coordinate pair (latitude/longitude)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoordinatesConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl CoordinatesConfig {
    /// Convert to the domain value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_geo_location(&self) -> Option<GeoLocation> {
        GeoLocation::new(self.latitude, self.longitude).ok()
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            coordinates: None,
            timezone: default_timezone(),
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

/// Local state storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted state files
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

fn default_state_dir() -> PathBuf {
    PathBuf::from(".nimbus")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_dir: default_state_dir(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and optional file
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., NIMBUS_STORAGE_STATE_DIR)
            .add_source(
                config::Environment::with_prefix("NIMBUS")
                    .separator("_")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
