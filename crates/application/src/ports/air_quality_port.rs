//! Air quality port
//!
//! Defines the interface for air-quality readings. The default adapter is
//! a simulated source; a real provider can be substituted without touching
//! the orchestration logic.

use async_trait::async_trait;
use domain::AirQuality;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching an air-quality reading
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AirQualityPort: Send + Sync {
    /// Fetch the current air quality for a location
    async fn fetch_air_quality(
        &self,
        location: &GeoLocation,
    ) -> Result<AirQuality, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn AirQualityPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AirQualityPort>();
    }
}
