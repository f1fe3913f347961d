//! User preferences entity

use serde::{Deserialize, Serialize};

use super::Location;
use crate::value_objects::UnitSystem;

/// Default auto-refresh interval in minutes
const fn default_update_interval() -> u32 {
    30
}

/// Persisted user preferences
///
/// Loaded once at startup with saved values merged over these defaults
/// (each field falls back individually), and written back in full on
/// every mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Measurement unit system
    #[serde(default)]
    pub units: UnitSystem,
    /// Minutes between automatic re-fetches; `0` disables auto-refresh
    #[serde(default = "default_update_interval")]
    pub update_interval_minutes: u32,
    /// Legacy favorites list; favorites are persisted under their own key
    /// and this field is never read or written by the preferences store
    #[serde(default)]
    pub favorites: Vec<Location>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            update_interval_minutes: default_update_interval(),
            favorites: Vec::new(),
        }
    }
}

impl UserPreferences {
    /// Whether auto-refresh is enabled
    #[must_use]
    pub const fn auto_refresh_enabled(&self) -> bool {
        self.update_interval_minutes > 0
    }
}
