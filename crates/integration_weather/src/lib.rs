//! Open-Meteo integration
//!
//! Clients for the Open-Meteo forecast and geocoding APIs
//! (<https://open-meteo.com>) and the pure normalizer that turns a raw
//! forecast payload into the domain weather model. No API key required.

pub mod client;
pub mod geocoding;
mod models;
pub mod normalize;

pub use client::{OpenMeteoClient, WeatherApiConfig, WeatherApiError};
pub use geocoding::{GeocodingClient, GeocodingConfig, GeocodingMatch};
pub use models::{CurrentData, DailyData, ForecastResponse, GeocodingResponse, HourlyData};
pub use normalize::normalize;
