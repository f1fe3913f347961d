//! Air quality entity

use serde::{Deserialize, Serialize};

use crate::value_objects::AqiCategory;

/// One air-quality reading
///
/// Produced fresh on every fetch alongside the weather data; a new
/// reading fully replaces the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AirQuality {
    /// Air Quality Index severity score
    pub aqi: u16,
    /// PM2.5 concentration in µg/m³
    pub pm25: f64,
    /// PM10 concentration in µg/m³
    pub pm10: f64,
    /// Ozone concentration in µg/m³
    pub o3: f64,
    /// Nitrogen dioxide concentration in µg/m³
    pub no2: f64,
    /// Sulphur dioxide concentration in µg/m³
    pub so2: f64,
    /// Carbon monoxide concentration in mg/m³
    pub co: f64,
    /// Severity category
    pub category: AqiCategory,
}
