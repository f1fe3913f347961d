//! Geocoding port
//!
//! Defines the interface for resolving place names (or "lat,lon" text) to
//! locations via the search endpoint.

use async_trait::async_trait;
use domain::Location;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for location search
///
/// A query with no matches resolves to an empty list, not an error; this
/// includes upstream responses with an absent or malformed result set.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Search for locations matching a free-form query
    async fn search(&self, query: &str) -> Result<Vec<Location>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn GeocodingPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn GeocodingPort>();
    }
}
