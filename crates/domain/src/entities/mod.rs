//! Entities - Weather records and identity-bearing model objects

mod air_quality;
mod current_weather;
mod forecast_day;
mod hourly_forecast;
mod location;
mod user_preferences;
mod weather_data;

pub use air_quality::AirQuality;
pub use current_weather::CurrentWeather;
pub use forecast_day::ForecastDay;
pub use hourly_forecast::{HourlyForecast, is_daylight_hour};
pub use location::{CURRENT_POSITION_ID, Location};
pub use user_preferences::UserPreferences;
pub use weather_data::{HOURLY_WINDOW, WeatherData};
