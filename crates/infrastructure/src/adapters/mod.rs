//! Adapters implementing the application ports

mod air_quality_adapter;
mod forecast_adapter;
mod geocoding_adapter;
mod geolocation_adapter;

pub use air_quality_adapter::SimulatedAirQuality;
pub use forecast_adapter::ForecastAdapter;
pub use geocoding_adapter::GeocodingAdapter;
pub use geolocation_adapter::ConfiguredGeolocator;
