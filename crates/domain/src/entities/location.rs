//! Location entity
//!
//! A place the dashboard can show weather for, produced by the geocoding
//! search or synthesized from a raw device position.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{GeoLocation, Timezone};

/// Identity of the synthetic "current position" entry, used when a device
/// position has no geocoding match
pub const CURRENT_POSITION_ID: i64 = 0;

/// A resolved place with geocoding identity
///
/// Immutable once constructed. Equality for favorites/dedup purposes is
/// by `id` (see `FavoritesService`), not structural.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// Geocoding identity; `0` denotes a synthetic current-position entry
    id: i64,
    /// Place name
    name: String,
    /// Country name (empty for synthetic entries)
    country: String,
    /// Coordinates in decimal degrees
    #[serde(flatten)]
    coordinates: GeoLocation,
    /// IANA timezone name
    timezone: Timezone,
    /// Region/state, when the geocoder provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    admin1: Option<String>,
}

impl Location {
    /// Create a location from a geocoding result
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        country: impl Into<String>,
        coordinates: GeoLocation,
        timezone: Timezone,
        admin1: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
            coordinates,
            timezone,
            admin1,
        }
    }

    /// Synthesize the "current position" entry for a device position with
    /// no geocoding match
    #[must_use]
    pub fn current_position(coordinates: GeoLocation, timezone: Timezone) -> Self {
        Self {
            id: CURRENT_POSITION_ID,
            name: "Current Location".to_string(),
            country: String::new(),
            coordinates,
            timezone,
            admin1: None,
        }
    }

    /// Geocoding identity
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Place name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Country name
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Coordinates
    #[must_use]
    pub const fn coordinates(&self) -> GeoLocation {
        self.coordinates
    }

    /// IANA timezone name
    #[must_use]
    pub const fn timezone(&self) -> &Timezone {
        &self.timezone
    }

    /// Region/state, when known
    #[must_use]
    pub fn admin1(&self) -> Option<&str> {
        self.admin1.as_deref()
    }

    /// Whether this is the synthetic current-position entry
    #[must_use]
    pub const fn is_current_position(&self) -> bool {
        self.id == CURRENT_POSITION_ID
    }

    /// Name qualified with region and country for disambiguation,
    /// e.g. "Paris, Île-de-France, France"
    #[must_use]
    pub fn qualified_name(&self) -> String {
        let mut parts = vec![self.name.as_str()];
        if let Some(admin1) = self.admin1.as_deref() {
            if !admin1.is_empty() && admin1 != self.name {
                parts.push(admin1);
            }
        }
        if !self.country.is_empty() {
            parts.push(self.country.as_str());
        }
        parts.join(", ")
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}
