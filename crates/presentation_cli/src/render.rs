//! Terminal rendering helpers
//!
//! Pure formatting of the dashboard read model into text lines.

use domain::value_objects::UnitSystem;
use domain::{AirQuality, CurrentWeather, ForecastDay, HourlyForecast, Location};

/// Terminal glyph for a symbolic icon key
#[must_use]
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "sun" => "☀️",
        "moon" => "🌙",
        "cloud-sun" => "🌤️",
        "cloud-moon" => "☁️",
        "cloud" => "☁️",
        "cloud-fog" => "🌫️",
        "cloud-drizzle" => "🌦️",
        "cloud-rain" => "🌧️",
        "cloud-snow" => "🌨️",
        "snowflake" => "❄️",
        "cloud-lightning" => "⛈️",
        _ => "❓",
    }
}

/// One-line header for the active location
#[must_use]
pub fn format_location(location: &Location) -> String {
    format!(
        "📍 {} ({})",
        location.qualified_name(),
        location.coordinates()
    )
}

/// One-line summary of current conditions
#[must_use]
pub fn format_current(current: &CurrentWeather, units: UnitSystem) -> String {
    format!(
        "{} {} {:.1}{} (feels like {:.1}{}), humidity {}%, wind {:.1} {}, pressure {:.0} hPa",
        icon_glyph(current.icon()),
        current.description(),
        current.temperature,
        units.temperature_suffix(),
        current.feels_like,
        units.temperature_suffix(),
        current.humidity,
        current.wind_speed,
        units.wind_speed_suffix(),
        current.pressure,
    )
}

/// One line per forecast day
#[must_use]
pub fn format_day(day: &ForecastDay, units: UnitSystem) -> String {
    format!(
        "{} {} {} {:.0}{}/{:.0}{}, precip {:.1}mm ({}%), UV {:.1}",
        day.date.format("%a %d %b"),
        icon_glyph(day.icon()),
        day.description(),
        day.temperature_max,
        units.temperature_suffix(),
        day.temperature_min,
        units.temperature_suffix(),
        day.precipitation_sum,
        day.precipitation_probability,
        day.uv_index,
    )
}

/// One line per hourly slot
#[must_use]
pub fn format_hour(hour: &HourlyForecast, units: UnitSystem) -> String {
    format!(
        "{} {} {:>5.1}{} {:>3}%",
        hour.time.format("%H:%M"),
        icon_glyph(hour.icon()),
        hour.temperature,
        units.temperature_suffix(),
        hour.precipitation_probability,
    )
}

/// One-line air quality summary
#[must_use]
pub fn format_air_quality(reading: &AirQuality) -> String {
    format!(
        "AQI {} ({}) - PM2.5 {:.0}, PM10 {:.0}, O3 {:.0}, NO2 {:.0} µg/m³",
        reading.aqi, reading.category, reading.pm25, reading.pm10, reading.o3, reading.no2,
    )
}

/// Sunrise/sunset line for today
#[must_use]
pub fn format_sun_times(day: &ForecastDay) -> String {
    format!(
        "🌅 {}  🌇 {}",
        day.sunrise.format("%H:%M"),
        day.sunset.format("%H:%M"),
    )
}
