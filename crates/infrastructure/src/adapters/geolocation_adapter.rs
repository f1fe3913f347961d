//! Configured positioning adapter
//!
//! A headless host has no device positioning API, so a fixed position
//! from configuration acts as the positioning source. Absence of the
//! adapter itself (no configured coordinates) models an absent
//! capability.

use application::ports::{GeolocationError, GeolocationPort};
use async_trait::async_trait;
use domain::value_objects::GeoLocation;
use tracing::debug;

/// Positioning source backed by a configured fixed position
#[derive(Debug, Clone)]
pub struct ConfiguredGeolocator {
    position: GeoLocation,
}

impl ConfiguredGeolocator {
    /// Create a positioning source reporting a fixed position
    #[must_use]
    pub const fn new(position: GeoLocation) -> Self {
        Self { position }
    }
}

#[async_trait]
impl GeolocationPort for ConfiguredGeolocator {
    async fn current_position(&self) -> Result<GeoLocation, GeolocationError> {
        debug!(position = %self.position, "Reporting configured position");
        Ok(self.position)
    }
}
