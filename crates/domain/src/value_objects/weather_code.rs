//! Weather code value object
//!
//! The upstream forecast API reports conditions as WMO weather codes
//! (0 = clear sky … 99 = thunderstorm with heavy hail), shared by the
//! current, hourly and daily records. This type is the single source of
//! truth for code semantics: the human-readable description and the
//! day/night icon key derived from each code.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon key reported for codes outside the classification table
pub const UNKNOWN_ICON: &str = "help-circle";

/// A WMO weather code as reported by the upstream forecast API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub u16);

/// All codes the classification table knows about
pub const KNOWN_CODES: [u16; 28] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81, 82, 85,
    86, 95, 96, 99,
];

impl WeatherCode {
    /// Human-readable description of the condition
    ///
    /// Codes outside the table map to `"Unknown"`.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self.0 {
            0 => "Clear sky",
            1 => "Mainly clear",
            2 => "Partly cloudy",
            3 => "Overcast",
            45 => "Fog",
            48 => "Depositing rime fog",
            51 => "Light drizzle",
            53 => "Moderate drizzle",
            55 => "Dense drizzle",
            56 => "Light freezing drizzle",
            57 => "Dense freezing drizzle",
            61 => "Slight rain",
            63 => "Moderate rain",
            65 => "Heavy rain",
            66 => "Light freezing rain",
            67 => "Heavy freezing rain",
            71 => "Slight snow fall",
            73 => "Moderate snow fall",
            75 => "Heavy snow fall",
            77 => "Snow grains",
            80 => "Slight rain showers",
            81 => "Moderate rain showers",
            82 => "Violent rain showers",
            85 => "Slight snow showers",
            86 => "Heavy snow showers",
            95 => "Thunderstorm",
            96 => "Thunderstorm with slight hail",
            99 => "Thunderstorm with heavy hail",
            _ => "Unknown",
        }
    }

    /// Symbolic icon key for the condition
    ///
    /// Most codes use the same icon day and night; clear and partly
    /// cloudy conditions switch to their moon variants after dark.
    /// Codes outside the table map to a generic icon.
    #[must_use]
    pub const fn icon(&self, is_day: bool) -> &'static str {
        match self.0 {
            0 | 1 => {
                if is_day {
                    "sun"
                } else {
                    "moon"
                }
            },
            2 => {
                if is_day {
                    "cloud-sun"
                } else {
                    "cloud-moon"
                }
            },
            3 => "cloud",
            45 | 48 => "cloud-fog",
            51 | 53 | 55 => "cloud-drizzle",
            56 | 57 => "snowflake",
            61 | 63 | 65 | 80..=82 => "cloud-rain",
            66 | 67 | 71 | 73 | 75 | 77 | 85 | 86 => "cloud-snow",
            95 | 96 | 99 => "cloud-lightning",
            _ => UNKNOWN_ICON,
        }
    }

    /// Whether this code appears in the classification table
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(
            self.0,
            0..=3
                | 45
                | 48
                | 51
                | 53
                | 55..=57
                | 61
                | 63
                | 65..=67
                | 71
                | 73
                | 75
                | 77
                | 80..=82
                | 85
                | 86
                | 95
                | 96
                | 99
        )
    }

    /// The raw code value
    #[must_use]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl From<u16> for WeatherCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

impl fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
