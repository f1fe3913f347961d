//! Air quality index category value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Air quality severity category
///
/// The six ordered bands of the Air Quality Index scale, from healthiest
/// to most hazardous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AqiCategory {
    /// AQI band 1
    Good,
    /// AQI band 2
    Moderate,
    /// AQI band 3
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthySensitive,
    /// AQI band 4
    Unhealthy,
    /// AQI band 5
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    /// AQI band 6
    Hazardous,
}

impl AqiCategory {
    /// All categories, healthiest first
    pub const ALL: [Self; 6] = [
        Self::Good,
        Self::Moderate,
        Self::UnhealthySensitive,
        Self::Unhealthy,
        Self::VeryUnhealthy,
        Self::Hazardous,
    ];

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            Self::Unhealthy => "Unhealthy",
            Self::VeryUnhealthy => "Very Unhealthy",
            Self::Hazardous => "Hazardous",
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
