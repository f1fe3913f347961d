//! Simulated air-quality adapter
//!
//! Stand-in for a real air-quality provider: generates pseudo-random
//! readings biased toward the three healthiest categories. Swapping in a
//! real provider means implementing `AirQualityPort` and changing the
//! wiring - the orchestration logic is untouched.

use application::error::ApplicationError;
use application::ports::AirQualityPort;
use async_trait::async_trait;
use domain::AirQuality;
use domain::value_objects::{AqiCategory, GeoLocation};
use rand::Rng;
use tracing::{debug, instrument};

/// Simulated air-quality source
#[derive(Debug, Clone, Default)]
pub struct SimulatedAirQuality;

impl SimulatedAirQuality {
    /// Create the simulated source
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AirQualityPort for SimulatedAirQuality {
    #[instrument(skip(self), fields(lat = location.latitude(), lon = location.longitude()))]
    async fn fetch_air_quality(
        &self,
        location: &GeoLocation,
    ) -> Result<AirQuality, ApplicationError> {
        let mut rng = rand::rng();
        let reading = AirQuality {
            aqi: rng.random_range(20..170),
            pm25: f64::from(rng.random_range(5..35)),
            pm10: f64::from(rng.random_range(10..60)),
            o3: f64::from(rng.random_range(20..120)),
            no2: f64::from(rng.random_range(10..60)),
            so2: f64::from(rng.random_range(5..25)),
            co: f64::from(rng.random_range(1..11)),
            // Bias toward better air quality: only the first three bands.
            category: AqiCategory::ALL[rng.random_range(0..3)],
        };
        debug!(aqi = reading.aqi, category = %reading.category, "Simulated air quality");
        Ok(reading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paris() -> GeoLocation {
        GeoLocation::new(48.8566, 2.3522).expect("valid coordinates")
    }

    #[tokio::test]
    async fn readings_stay_in_documented_ranges() {
        let source = SimulatedAirQuality::new();
        for _ in 0..50 {
            let reading = source.fetch_air_quality(&paris()).await.expect("reading");
            assert!((20..170).contains(&reading.aqi));
            assert!((5.0..35.0).contains(&reading.pm25));
            assert!((10.0..60.0).contains(&reading.pm10));
            assert!((20.0..120.0).contains(&reading.o3));
            assert!((10.0..60.0).contains(&reading.no2));
            assert!((5.0..25.0).contains(&reading.so2));
            assert!((1.0..11.0).contains(&reading.co));
        }
    }

    #[tokio::test]
    async fn category_is_biased_toward_healthy_bands() {
        let source = SimulatedAirQuality::new();
        for _ in 0..50 {
            let reading = source.fetch_air_quality(&paris()).await.expect("reading");
            assert!(reading.category <= AqiCategory::UnhealthySensitive);
        }
    }
}
