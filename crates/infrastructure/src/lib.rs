//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer: the Open-Meteo
//! forecast and geocoding adapters, the simulated air-quality source, the
//! configured positioning source, and the file-backed state store.

pub mod adapters;
pub mod config;
pub mod state;

pub use adapters::{
    ConfiguredGeolocator, ForecastAdapter, GeocodingAdapter, SimulatedAirQuality,
};
pub use config::{AppConfig, CoordinatesConfig, LocationConfig, StorageConfig};
pub use state::{FileStateStore, MemoryStateStore};
