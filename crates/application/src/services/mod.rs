//! Application services
//!
//! Use-case orchestration over the ports: location resolution, the
//! persisted preference/favorite stores, the weather fetch pipeline, and
//! the dashboard aggregate that presentation code consumes.

mod dashboard_service;
mod favorites_service;
mod location_service;
mod preferences_service;
mod weather_service;

pub use dashboard_service::{DashboardService, DashboardSnapshot};
pub use favorites_service::FavoritesService;
pub use location_service::LocationService;
pub use preferences_service::PreferencesService;
pub use weather_service::{WeatherService, WeatherSnapshot};
