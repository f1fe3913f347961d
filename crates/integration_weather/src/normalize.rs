//! Forecast payload normalization
//!
//! Pure transformation of the raw struct-of-arrays forecast payload into
//! the domain weather model. The upstream is queried with
//! `timezone=auto`, so hourly timestamps are local wall-clock times; the
//! per-hour day flag is derived from each slot's own hour component.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use domain::value_objects::{UnitSystem, WeatherCode};
use domain::{
    CurrentWeather, ForecastDay, HOURLY_WINDOW, HourlyForecast, WeatherData,
};

use crate::client::WeatherApiError;
use crate::models::{CurrentData, DailyData, ForecastResponse, HourlyData};

/// Normalize a raw forecast payload into domain weather data
///
/// The hourly series keeps exactly the first [`HOURLY_WINDOW`] slots no
/// matter how many the upstream returned. Array-length mismatches in the
/// payload surface as parse errors.
pub fn normalize(
    response: &ForecastResponse,
    units: UnitSystem,
) -> Result<WeatherData, WeatherApiError> {
    let current = normalize_current(&response.current);
    let daily = normalize_daily(&response.daily)?;
    let hourly = normalize_hourly(&response.hourly)?;
    Ok(WeatherData::new(current, daily, hourly, units))
}

/// Map the current-conditions block
///
/// The upstream day flag is an integer; `1` means day.
fn normalize_current(current: &CurrentData) -> CurrentWeather {
    CurrentWeather {
        temperature: current.temperature_2m,
        feels_like: current.apparent_temperature,
        humidity: current.relative_humidity_2m,
        precipitation: current.precipitation,
        weather_code: WeatherCode(current.weather_code),
        wind_speed: current.wind_speed_10m,
        wind_direction: current.wind_direction_10m,
        is_day: current.is_day == 1,
        pressure: current.surface_pressure,
    }
}

/// Map the daily block: one entry per element of the date array
fn normalize_daily(daily: &DailyData) -> Result<Vec<ForecastDay>, WeatherApiError> {
    let days = daily.time.len();
    check_len("daily.weather_code", daily.weather_code.len(), days)?;
    check_len("daily.temperature_2m_max", daily.temperature_2m_max.len(), days)?;
    check_len("daily.temperature_2m_min", daily.temperature_2m_min.len(), days)?;
    check_len(
        "daily.apparent_temperature_max",
        daily.apparent_temperature_max.len(),
        days,
    )?;
    check_len(
        "daily.apparent_temperature_min",
        daily.apparent_temperature_min.len(),
        days,
    )?;
    check_len("daily.sunrise", daily.sunrise.len(), days)?;
    check_len("daily.sunset", daily.sunset.len(), days)?;
    check_len("daily.uv_index_max", daily.uv_index_max.len(), days)?;
    check_len("daily.precipitation_sum", daily.precipitation_sum.len(), days)?;
    check_len(
        "daily.precipitation_probability_max",
        daily.precipitation_probability_max.len(),
        days,
    )?;

    let mut result = Vec::with_capacity(days);
    for i in 0..days {
        result.push(ForecastDay {
            date: parse_date(&daily.time[i])?,
            temperature_max: daily.temperature_2m_max[i],
            temperature_min: daily.temperature_2m_min[i],
            feels_like_max: daily.apparent_temperature_max[i],
            feels_like_min: daily.apparent_temperature_min[i],
            weather_code: WeatherCode(daily.weather_code[i]),
            precipitation_sum: daily.precipitation_sum[i],
            precipitation_probability: daily.precipitation_probability_max[i],
            sunrise: parse_datetime(&daily.sunrise[i])?,
            sunset: parse_datetime(&daily.sunset[i])?,
            uv_index: daily.uv_index_max[i],
        });
    }
    Ok(result)
}

/// Map the hourly block: always the first [`HOURLY_WINDOW`] slots
fn normalize_hourly(hourly: &HourlyData) -> Result<Vec<HourlyForecast>, WeatherApiError> {
    let slots = hourly.time.len().min(HOURLY_WINDOW);
    check_len("hourly.temperature_2m", hourly.temperature_2m.len(), slots)?;
    check_len(
        "hourly.relative_humidity_2m",
        hourly.relative_humidity_2m.len(),
        slots,
    )?;
    check_len(
        "hourly.apparent_temperature",
        hourly.apparent_temperature.len(),
        slots,
    )?;
    check_len(
        "hourly.precipitation_probability",
        hourly.precipitation_probability.len(),
        slots,
    )?;
    check_len("hourly.precipitation", hourly.precipitation.len(), slots)?;
    check_len("hourly.weather_code", hourly.weather_code.len(), slots)?;
    check_len("hourly.visibility", hourly.visibility.len(), slots)?;
    check_len("hourly.wind_speed_10m", hourly.wind_speed_10m.len(), slots)?;
    check_len(
        "hourly.wind_direction_10m",
        hourly.wind_direction_10m.len(),
        slots,
    )?;
    check_len("hourly.uv_index", hourly.uv_index.len(), slots)?;

    let mut result = Vec::with_capacity(slots);
    for i in 0..slots {
        let time = parse_local_datetime(&hourly.time[i])?;
        result.push(HourlyForecast {
            time,
            temperature: hourly.temperature_2m[i],
            feels_like: hourly.apparent_temperature[i],
            humidity: hourly.relative_humidity_2m[i],
            precipitation_probability: hourly.precipitation_probability[i],
            precipitation: hourly.precipitation[i],
            weather_code: WeatherCode(hourly.weather_code[i]),
            wind_speed: hourly.wind_speed_10m[i],
            wind_direction: hourly.wind_direction_10m[i],
            uv_index: hourly.uv_index[i],
            visibility: hourly.visibility[i],
            is_day: HourlyForecast::day_flag_for(time),
        });
    }
    Ok(result)
}

fn check_len(name: &str, len: usize, required: usize) -> Result<(), WeatherApiError> {
    if len < required {
        return Err(WeatherApiError::ParseError(format!(
            "array '{name}' has {len} entries, expected at least {required}"
        )));
    }
    Ok(())
}

/// Parse an upstream date string (`2026-08-07`)
fn parse_date(s: &str) -> Result<NaiveDate, WeatherApiError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| WeatherApiError::ParseError(format!("Invalid date '{s}': {e}")))
}

/// Parse an upstream local datetime string (`2026-08-07T14:00`)
fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, WeatherApiError> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| WeatherApiError::ParseError(format!("Invalid datetime '{s}': {e}")))
}

/// Parse an upstream datetime string to an absolute timestamp
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, WeatherApiError> {
    if let Ok(dt) = parse_local_datetime(s) {
        return Ok(Utc.from_utc_datetime(&dt));
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| WeatherApiError::ParseError(format!("Invalid datetime '{s}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CurrentData, DailyData, HourlyData};
    use chrono::Timelike;

    fn current_block(is_day: u8, code: u16) -> CurrentData {
        CurrentData {
            time: "2026-08-07T14:00".to_string(),
            temperature_2m: 21.4,
            relative_humidity_2m: 52,
            apparent_temperature: 20.1,
            is_day,
            precipitation: 0.2,
            weather_code: code,
            surface_pressure: 1014.8,
            wind_speed_10m: 13.2,
            wind_direction_10m: 245,
        }
    }

    fn daily_block(days: usize) -> DailyData {
        DailyData {
            time: (0..days).map(|i| format!("2026-08-{:02}", 7 + i)).collect(),
            weather_code: vec![61; days],
            temperature_2m_max: vec![24.0; days],
            temperature_2m_min: vec![14.0; days],
            apparent_temperature_max: vec![23.0; days],
            apparent_temperature_min: vec![13.0; days],
            sunrise: (0..days)
                .map(|i| format!("2026-08-{:02}T04:28", 7 + i))
                .collect(),
            sunset: (0..days)
                .map(|i| format!("2026-08-{:02}T19:12", 7 + i))
                .collect(),
            uv_index_max: vec![5.5; days],
            precipitation_sum: vec![1.0; days],
            precipitation_probability_max: vec![40; days],
        }
    }

    fn hourly_block(slots: usize) -> HourlyData {
        HourlyData {
            time: (0..slots)
                .map(|i| format!("2026-08-{:02}T{:02}:00", 7 + i / 24, i % 24))
                .collect(),
            temperature_2m: vec![18.0; slots],
            relative_humidity_2m: vec![60; slots],
            apparent_temperature: vec![17.0; slots],
            precipitation_probability: vec![10; slots],
            precipitation: vec![0.0; slots],
            weather_code: vec![2; slots],
            visibility: vec![24_140.0; slots],
            wind_speed_10m: vec![9.0; slots],
            wind_direction_10m: vec![180; slots],
            uv_index: vec![3.0; slots],
        }
    }

    fn response(days: usize, slots: usize) -> ForecastResponse {
        ForecastResponse {
            latitude: 48.8566,
            longitude: 2.3522,
            timezone: "Europe/Paris".to_string(),
            current: current_block(1, 2),
            hourly: hourly_block(slots),
            daily: daily_block(days),
        }
    }

    #[test]
    fn current_maps_directly() {
        let data = normalize(&response(1, 24), UnitSystem::Metric).expect("normalize");
        let current = data.current;
        assert!((current.temperature - 21.4).abs() < f64::EPSILON);
        assert!((current.feels_like - 20.1).abs() < f64::EPSILON);
        assert_eq!(current.humidity, 52);
        assert!(current.is_day);
        assert_eq!(current.description(), "Partly cloudy");
        assert_eq!(current.icon(), "cloud-sun");
    }

    #[test]
    fn day_flag_is_one_not_truthy() {
        let mut raw = response(1, 1);
        raw.current = current_block(0, 2);
        let data = normalize(&raw, UnitSystem::Metric).expect("normalize");
        assert!(!data.current.is_day);
        assert_eq!(data.current.icon(), "cloud-moon");

        raw.current = current_block(2, 2);
        let data = normalize(&raw, UnitSystem::Metric).expect("normalize");
        assert!(!data.current.is_day, "only 1 means day");
    }

    #[test]
    fn daily_yields_one_entry_per_date() {
        let data = normalize(&response(7, 24), UnitSystem::Metric).expect("normalize");
        assert_eq!(data.daily.len(), 7);
        assert_eq!(
            data.daily[0].date,
            NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid")
        );
        assert_eq!(
            data.daily[6].date,
            NaiveDate::from_ymd_opt(2026, 8, 13).expect("valid")
        );
    }

    #[test]
    fn daily_icons_are_day_variants() {
        let data = normalize(&response(2, 1), UnitSystem::Metric).expect("normalize");
        // Code 61 in the fixture: slight rain, day icon.
        assert_eq!(data.daily[0].description(), "Slight rain");
        assert_eq!(data.daily[0].icon(), "cloud-rain");
    }

    #[test]
    fn daily_parses_sun_times() {
        let data = normalize(&response(1, 1), UnitSystem::Metric).expect("normalize");
        let day = &data.daily[0];
        assert_eq!(day.sunrise.format("%H:%M").to_string(), "04:28");
        assert_eq!(day.sunset.format("%H:%M").to_string(), "19:12");
    }

    #[test]
    fn hourly_is_truncated_to_window() {
        let data = normalize(&response(1, 72), UnitSystem::Metric).expect("normalize");
        assert_eq!(data.hourly.len(), HOURLY_WINDOW);
    }

    #[test]
    fn hourly_keeps_shorter_series() {
        let data = normalize(&response(1, 6), UnitSystem::Metric).expect("normalize");
        assert_eq!(data.hourly.len(), 6);
    }

    #[test]
    fn hourly_day_flag_follows_slot_hour() {
        let data = normalize(&response(1, 24), UnitSystem::Metric).expect("normalize");
        for slot in &data.hourly {
            let hour = slot.time.hour();
            assert_eq!(slot.is_day, (6..18).contains(&hour), "hour {hour}");
        }
        // 03:00 is night, 12:00 is day.
        assert!(!data.hourly[3].is_day);
        assert!(data.hourly[12].is_day);
        assert_eq!(data.hourly[3].icon(), "cloud-moon");
        assert_eq!(data.hourly[12].icon(), "cloud-sun");
    }

    #[test]
    fn units_are_passed_through() {
        let data = normalize(&response(1, 1), UnitSystem::Imperial).expect("normalize");
        assert_eq!(data.units, UnitSystem::Imperial);
    }

    #[test]
    fn short_daily_array_is_a_parse_error() {
        let mut raw = response(3, 1);
        raw.daily.sunrise.truncate(1);
        let err = normalize(&raw, UnitSystem::Metric).expect_err("should fail");
        assert!(matches!(err, WeatherApiError::ParseError(_)));
        assert!(err.to_string().contains("daily.sunrise"));
    }

    #[test]
    fn short_hourly_array_is_a_parse_error() {
        let mut raw = response(1, 24);
        raw.hourly.uv_index.truncate(10);
        let err = normalize(&raw, UnitSystem::Metric).expect_err("should fail");
        assert!(err.to_string().contains("hourly.uv_index"));
    }

    #[test]
    fn hourly_surplus_beyond_window_is_ignored_even_if_ragged() {
        // Arrays only need to cover the 24-slot window; a ragged tail
        // beyond it does not matter.
        let mut raw = response(1, 48);
        raw.hourly.uv_index.truncate(24);
        let data = normalize(&raw, UnitSystem::Metric).expect("normalize");
        assert_eq!(data.hourly.len(), 24);
    }

    #[test]
    fn malformed_date_is_a_parse_error() {
        let mut raw = response(1, 1);
        raw.daily.time[0] = "not-a-date".to_string();
        let err = normalize(&raw, UnitSystem::Metric).expect_err("should fail");
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn datetime_with_seconds_parses() {
        assert!(parse_datetime("2026-08-07T04:28:13").is_ok());
        assert!(parse_local_datetime("2026-08-07T04:28:13").is_ok());
    }

    #[test]
    fn rfc3339_datetime_parses() {
        let dt = parse_datetime("2026-08-07T04:28:00+02:00").expect("parse");
        assert_eq!(dt.format("%H:%M").to_string(), "02:28");
    }
}
