//! Unit system value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Measurement unit system for weather data
///
/// Controls the unit selectors sent to the upstream forecast API and the
/// units every fetched value is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius, km/h, mm
    #[default]
    Metric,
    /// Fahrenheit, mph, mm
    Imperial,
}

impl UnitSystem {
    /// Upstream `temperature_unit` query selector
    #[must_use]
    pub const fn temperature_param(&self) -> &'static str {
        match self {
            Self::Metric => "celsius",
            Self::Imperial => "fahrenheit",
        }
    }

    /// Upstream `wind_speed_unit` query selector
    #[must_use]
    pub const fn wind_speed_param(&self) -> &'static str {
        match self {
            Self::Metric => "kmh",
            Self::Imperial => "mph",
        }
    }

    /// Temperature unit suffix for display
    #[must_use]
    pub const fn temperature_suffix(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Wind speed unit suffix for display
    #[must_use]
    pub const fn wind_speed_suffix(&self) -> &'static str {
        match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(DomainError::InvalidUnitSystem(s.to_string())),
        }
    }
}
