//! Geolocation port
//!
//! Defines the interface for the host's positioning source. A single-shot
//! position request, never continuous tracking.

use async_trait::async_trait;
use domain::value_objects::GeoLocation;
#[cfg(test)]
use mockall::automock;
use thiserror::Error;

/// Positioning source errors
#[derive(Debug, Error)]
pub enum GeolocationError {
    /// The user or platform denied access to the position
    #[error("permission denied")]
    PermissionDenied,

    /// The position request timed out
    #[error("position request timed out")]
    Timeout,

    /// The position is unavailable for another reason
    #[error("{0}")]
    Unavailable(String),
}

/// Port for one-shot device positioning
///
/// Every failure is terminal for the resolution attempt; callers never
/// retry automatically.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeolocationPort: Send + Sync {
    /// Request the current position once
    async fn current_position(&self) -> Result<GeoLocation, GeolocationError>;
}
