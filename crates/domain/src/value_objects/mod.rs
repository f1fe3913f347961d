//! Value Objects - Immutable, identity-less domain primitives

mod aqi_category;
mod geo_location;
mod theme;
mod timezone;
mod unit_system;
mod weather_code;

pub use aqi_category::AqiCategory;
pub use geo_location::{GeoLocation, InvalidCoordinates};
pub use theme::Theme;
pub use timezone::Timezone;
pub use unit_system::UnitSystem;
pub use weather_code::WeatherCode;
