//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod air_quality_port;
mod forecast_port;
mod geocoding_port;
mod geolocation_port;
mod state_port;

#[cfg(test)]
pub use air_quality_port::MockAirQualityPort;
pub use air_quality_port::AirQualityPort;
#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use forecast_port::ForecastPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geolocation_port::MockGeolocationPort;
pub use geolocation_port::{GeolocationError, GeolocationPort};
#[cfg(test)]
pub use state_port::MockStatePort;
pub use state_port::{StatePort, StatePortExt, keys};
